//! Use-Case-Funktionen für Viewport-Zustand.

use crate::app::AppState;
use glam::DVec2;

/// Aktualisiert die gespeicherte Viewport-Größe.
pub fn resize(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}

/// Merkt die Mausposition über der Karte.
pub fn set_cursor(state: &mut AppState, screen_pos: Option<DVec2>) {
    state.view.cursor_screen = screen_pos;
}
