//! Optionen-Dialog für Karte, Darstellung und Export.

use crate::app::{AppIntent, AppState};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(360.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(500.0)
                .show(ui, |ui| {
                    // ── Karte ───────────────────────────────────────
                    ui.collapsing("Karte", |ui| {
                        changed |= drag_row(
                            ui,
                            "Start-Breite:",
                            &mut opts.initial_center_lat,
                            -85.0..=85.0,
                            0.01,
                        );
                        changed |= drag_row(
                            ui,
                            "Start-Länge:",
                            &mut opts.initial_center_lng,
                            -180.0..=180.0,
                            0.01,
                        );
                        changed |= drag_row(
                            ui,
                            "Start-Zoom:",
                            &mut opts.initial_zoom,
                            0.0..=22.0,
                            0.1,
                        );
                        changed |= drag_row(ui, "Zoom min:", &mut opts.min_zoom, 0.0..=22.0, 0.1);
                        changed |= drag_row(ui, "Zoom max:", &mut opts.max_zoom, 0.0..=22.0, 0.1);
                        changed |= drag_row(
                            ui,
                            "Zoom-Schritt:",
                            &mut opts.zoom_step,
                            0.1..=4.0,
                            0.05,
                        );
                        changed |= drag_row(
                            ui,
                            "Scroll-Zoom/px:",
                            &mut opts.scroll_zoom_per_pixel,
                            0.001..=0.1,
                            0.001,
                        );
                        changed |= drag_row(
                            ui,
                            "Fit-Rand (px):",
                            &mut opts.fit_padding_px,
                            0.0..=200.0,
                            1.0,
                        );
                    });

                    // ── Strecke ─────────────────────────────────────
                    ui.collapsing("Strecke", |ui| {
                        changed |= color_edit(ui, "Linienfarbe:", &mut opts.path_color);
                        changed |= color_edit(ui, "Routing-Vorschau:", &mut opts.snapped_path_color);
                        ui.horizontal(|ui| {
                            ui.label("Linienbreite (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.path_width_px)
                                        .range(1.0..=20.0)
                                        .speed(0.1),
                                )
                                .changed();
                        });
                    });

                    // ── Marker ──────────────────────────────────────
                    ui.collapsing("Marker", |ui| {
                        changed |= color_edit(ui, "Start:", &mut opts.start_marker_color);
                        changed |= color_edit(ui, "Ziel:", &mut opts.finish_marker_color);
                        ui.horizontal(|ui| {
                            ui.label("Radius (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.marker_radius_px)
                                        .range(3.0..=30.0)
                                        .speed(0.2),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Klick-Radius (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.marker_hit_radius_px)
                                        .range(3.0..=50.0)
                                        .speed(0.2),
                                )
                                .changed();
                        });
                    });

                    // ── Hintergrund ─────────────────────────────────
                    ui.collapsing("Hintergrund", |ui| {
                        changed |= color_edit(ui, "Fläche:", &mut opts.map_background_color);
                        changed |= color_edit(ui, "Gradnetz:", &mut opts.graticule_color);
                    });

                    // ── Hinweise & Export ───────────────────────────
                    ui.collapsing("Hinweise & Export", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Hinweisdauer (ms):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.notice_duration_ms)
                                        .range(500..=20_000)
                                        .speed(50),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Dateiname:");
                            changed |= ui
                                .text_edit_singleline(&mut opts.export_file_name)
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Nachkommastellen:");
                            changed |= ui
                                .add(egui::DragValue::new(&mut opts.geojson_precision).range(0..=15))
                                .changed();
                        });
                        changed |= ui
                            .checkbox(&mut opts.snapping_enabled, "Routing-Anbindung (Snapping)")
                            .changed();
                    });
                });

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged { options: opts });
    }

    events
}

fn drag_row(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut f64,
    range: std::ops::RangeInclusive<f64>,
    speed: f64,
) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        changed = ui
            .add(egui::DragValue::new(value).range(range).speed(speed))
            .changed();
    });
    changed
}

/// Farbauswahl für RGBA-Werte im Bereich 0..1.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = egui::Color32::from_rgba_unmultiplied(
            (color[0] * 255.0) as u8,
            (color[1] * 255.0) as u8,
            (color[2] * 255.0) as u8,
            (color[3] * 255.0) as u8,
        );
        if ui.color_edit_button_srgba(&mut c).changed() {
            color[0] = c.r() as f32 / 255.0;
            color[1] = c.g() as f32 / 255.0;
            color[2] = c.b() as f32 / 255.0;
            color[3] = c.a() as f32 / 255.0;
            changed = true;
        }
    });
    changed
}
