use crate::app::{AppIntent, NoticeKind};

/// Zeigt einen transienten Hinweis oben mittig über der Karte.
pub fn show_notice(ctx: &egui::Context, notice: Option<NoticeKind>) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let Some(kind) = notice else {
        return events;
    };

    let fill = if kind.is_error() {
        egui::Color32::from_rgb(180, 40, 40)
    } else {
        egui::Color32::from_rgb(40, 90, 160)
    };

    egui::Area::new(egui::Id::new("transient_notice"))
        .anchor(egui::Align2::CENTER_TOP, [0.0, 64.0])
        .interactable(true)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style())
                .fill(fill)
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.colored_label(egui::Color32::WHITE, kind.message());
                        if ui.small_button("x").clicked() {
                            events.push(AppIntent::NoticeDismissed);
                        }
                    });
                });
        });

    events
}
