//! Keyboard-Shortcuts für den Viewport.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (modifiers, key_o, key_s, key_n, key_l, key_enter, key_plus, key_minus, key_zero) =
        ui.input(|i| {
            (
                i.modifiers,
                i.key_pressed(egui::Key::O),
                i.key_pressed(egui::Key::S),
                i.key_pressed(egui::Key::N),
                i.key_pressed(egui::Key::L),
                i.key_pressed(egui::Key::Enter),
                i.key_pressed(egui::Key::Plus) || i.key_pressed(egui::Key::Equals),
                i.key_pressed(egui::Key::Minus),
                i.key_pressed(egui::Key::Num0),
            )
        });

    // Ctrl+O (Import), Ctrl+S (Export), Ctrl+N (neue Strecke)
    if modifiers.command && key_o {
        events.push(AppIntent::ImportRequested);
    }

    if modifiers.command && key_s {
        events.push(AppIntent::ExportRequested);
    }

    if modifiers.command && key_n {
        events.push(AppIntent::ResetPathRequested);
    }

    // L schließt als Runde, Enter schließt offen ab
    if !modifiers.command && key_l {
        events.push(AppIntent::CloseLoopRequested);
    }

    if key_enter {
        events.push(AppIntent::FinishPathRequested);
    }

    if key_plus {
        events.push(AppIntent::ZoomInRequested);
    }

    if key_minus {
        events.push(AppIntent::ZoomOutRequested);
    }

    if modifiers.command && key_zero {
        events.push(AppIntent::ResetViewRequested);
    }

    events
}
