//! Handler für das Zeichnen der Strecke.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{MarkerAction, Waypoint};

/// Hängt einen Wegpunkt an die offene Strecke an.
pub fn add_waypoint(state: &mut AppState, point: Waypoint) {
    use_cases::drawing::add_waypoint(state, point);
}

/// Führt die Aktion eines angeklickten Markers aus.
pub fn trigger_marker_action(state: &mut AppState, action: MarkerAction) {
    use_cases::drawing::trigger_marker_action(state, action);
}

/// Verwirft die Strecke.
pub fn reset_path(state: &mut AppState) {
    use_cases::drawing::reset_path(state);
}
