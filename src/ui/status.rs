//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Points: {}", state.point_count()));

            ui.separator();

            let drawing_label = if state.is_drawing_open() {
                "Drawing"
            } else if state.editor.route().is_loop() {
                "Closed (loop)"
            } else {
                "Closed"
            };
            ui.label(drawing_label);

            ui.separator();

            ui.label(format!("Zoom: {:.1}", state.view.map_view.zoom));

            ui.separator();

            match state.view.cursor_geo() {
                Some(cursor) => ui.label(format!("Cursor: {}", cursor)),
                None => ui.label("Cursor: -"),
            };

            if let Some(path) = &state.ui.current_file_path {
                ui.separator();
                let filename = std::path::Path::new(path)
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("unknown");
                ui.label(format!("File: {}", filename));
            }

            if let Some(label) = state.command_log.last_action_label() {
                ui.separator();
                ui.label(format!("Last: {}", label));
            }

            if state.snap_queue.is_some() {
                ui.separator();
                ui.label("Snapping: on");
            }
        });
    });
}
