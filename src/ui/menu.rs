//! Top-Menü (File, Path, View, Edit).

use crate::app::{AppIntent, AppState};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Import GeoJSON...").clicked() {
                    events.push(AppIntent::ImportRequested);
                    ui.close();
                }

                if ui.button("Export GeoJSON...").clicked() {
                    events.push(AppIntent::ExportRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Path", |ui| {
                let can_close = state.is_drawing_open() && state.can_export();

                if ui
                    .add_enabled(can_close, egui::Button::new("Close as Loop"))
                    .clicked()
                {
                    events.push(AppIntent::CloseLoopRequested);
                    ui.close();
                }

                if ui
                    .add_enabled(can_close, egui::Button::new("Finish Path"))
                    .clicked()
                {
                    events.push(AppIntent::FinishPathRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Clear Path").clicked() {
                    events.push(AppIntent::ResetPathRequested);
                    ui.close();
                }
            });

            ui.menu_button("View", |ui| {
                if ui.button("Zoom In").clicked() {
                    events.push(AppIntent::ZoomInRequested);
                    ui.close();
                }

                if ui.button("Zoom Out").clicked() {
                    events.push(AppIntent::ZoomOutRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Reset View").clicked() {
                    events.push(AppIntent::ResetViewRequested);
                    ui.close();
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui.button("Options...").clicked() {
                    events.push(AppIntent::OpenOptionsDialogRequested);
                    ui.close();
                }
            });
        });
    });

    events
}
