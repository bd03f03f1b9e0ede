//! Toolbar mit den Strecken-Aktionen.

use crate::app::{AppIntent, AppState};

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let can_close = state.is_drawing_open() && state.can_export();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui.button("Clear Path").clicked() {
                events.push(AppIntent::ResetPathRequested);
            }

            ui.separator();

            if ui
                .add_enabled(can_close, egui::Button::new("Close Loop"))
                .on_hover_text("Same as clicking the start marker")
                .clicked()
            {
                events.push(AppIntent::CloseLoopRequested);
            }

            if ui
                .add_enabled(can_close, egui::Button::new("Finish"))
                .on_hover_text("Same as clicking the last marker")
                .clicked()
            {
                events.push(AppIntent::FinishPathRequested);
            }

            ui.separator();

            if ui.button("Import GeoJSON").clicked() {
                events.push(AppIntent::ImportRequested);
            }

            // Export bleibt klickbar: zu kurze Strecken erzeugen einen Hinweis
            if ui.button("Export GeoJSON").clicked() {
                events.push(AppIntent::ExportRequested);
            }
        });
    });

    events
}
