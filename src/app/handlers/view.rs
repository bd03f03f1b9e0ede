//! Handler für Kartenausschnitt und Viewport.

use crate::app::use_cases;
use crate::app::AppState;
use glam::DVec2;

/// Stellt den Startausschnitt wieder her.
pub fn reset_view(state: &mut AppState) {
    use_cases::camera::reset_view(state);
}

/// Zoomt stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    use_cases::camera::zoom_in(state);
}

/// Zoomt stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    use_cases::camera::zoom_out(state);
}

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    use_cases::viewport::resize(state, size);
}

/// Merkt die Mausposition für die Statusleiste.
pub fn set_cursor(state: &mut AppState, screen_pos: Option<DVec2>) {
    use_cases::viewport::set_cursor(state, screen_pos);
}

/// Verschiebt die Karte um ein Pixel-Delta.
pub fn pan(state: &mut AppState, delta: DVec2) {
    use_cases::camera::pan(state, delta);
}

/// Zoomt mit optionalem Fokuspunkt in Bildschirmkoordinaten.
pub fn zoom_towards(state: &mut AppState, steps: f64, focus_screen: Option<DVec2>) {
    use_cases::camera::zoom_towards(state, steps, focus_screen);
}
