use crate::app::AppIntent;

/// Zeigt einen blockierenden Hinweis als modales Fenster.
pub fn show_alert(ctx: &egui::Context, alert: Option<&str>) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let Some(message) = alert else {
        return events;
    };

    egui::Modal::new(egui::Id::new("alert_modal")).show(ctx, |ui| {
        ui.set_min_width(260.0);
        ui.vertical_centered(|ui| {
            ui.add_space(6.0);
            ui.label(message);
            ui.add_space(10.0);

            if ui.button("OK").clicked() {
                events.push(AppIntent::AlertDismissed);
            }
        });
    });

    events
}
