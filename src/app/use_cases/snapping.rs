//! Use-Case-Funktionen für die optionale Routing-Anbindung.
//!
//! Der Editor legt bei jeder Routenänderung die vollständige Punktfolge in eine
//! Warteschlange. Der Host entnimmt sie pro Frame, übergibt sie seiner
//! Routing-Engine und reicht den straßengebundenen Verlauf zurück.
//!
//! Die mitgelieferte Binary bindet keine Routing-Engine an: sie protokolliert
//! die Anfragen nur, daher erscheint dort keine Routing-Vorschau.
//! [`apply_snapped_path`] ist der Einstiegspunkt für Hosts mit eigener Engine.

use crate::app::AppState;
use crate::core::Waypoint;
use crate::editor::{QueuedSnapper, RouteSnapper};

/// Hängt die Warteschlange gemäß `options.snapping_enabled` an oder ab.
pub fn configure(state: &mut AppState) {
    match (state.options.snapping_enabled, state.snap_queue.is_some()) {
        (true, false) => {
            let queue = QueuedSnapper::new();
            let mut snapper: Box<dyn RouteSnapper> = Box::new(queue.clone());
            snapper.request_snap(state.editor.route().points());
            state.editor.set_snapper(Some(snapper));
            state.snap_queue = Some(queue);
            log::info!("Routing-Anbindung aktiviert");
        }
        (false, true) => {
            state.editor.set_snapper(None);
            state.snap_queue = None;
            state.scene.set_snapped_line(None);
            log::info!("Routing-Anbindung deaktiviert");
        }
        _ => {}
    }
}

/// Entnimmt die jüngste Routing-Anfrage (ältere sind überholt).
pub fn take_request(state: &mut AppState) -> Option<Vec<Waypoint>> {
    state.snap_queue.as_ref()?.take_latest()
}

/// Übernimmt den berechneten Verlauf als Vorschau; `None` oder weniger als
/// zwei Punkte entfernen die Vorschau.
pub fn apply_snapped_path(state: &mut AppState, path: Option<Vec<Waypoint>>) {
    let path = path.filter(|points| points.len() > 1);
    log::debug!(
        "Routing-Vorschau: {} Punkte",
        path.as_ref().map_or(0, Vec::len)
    );
    state.scene.set_snapped_line(path);
}
