//! Use-Case-Funktionen für den Kartenausschnitt.

use crate::app::{AppState, ViewState};
use glam::DVec2;

/// Setzt den Ausschnitt auf die konfigurierte Startansicht zurück.
pub fn reset_view(state: &mut AppState) {
    state.view.map_view = ViewState::initial_map_view(&state.options);
}

/// Zoomt stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    let (min_zoom, max_zoom) = state.options.zoom_limits();
    state
        .view
        .map_view
        .zoom_by(state.options.zoom_step, min_zoom, max_zoom);
}

/// Zoomt stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    let (min_zoom, max_zoom) = state.options.zoom_limits();
    state
        .view
        .map_view
        .zoom_by(-state.options.zoom_step, min_zoom, max_zoom);
}

/// Verschiebt die Karte um ein Pixel-Delta.
pub fn pan(state: &mut AppState, delta: DVec2) {
    state.view.map_view.pan_pixels(delta);
}

/// Zoomt um `steps` Stufen.
///
/// Falls `focus_screen` angegeben ist, bleibt der Punkt unter der Maus
/// an derselben Bildschirmposition.
pub fn zoom_towards(state: &mut AppState, steps: f64, focus_screen: Option<DVec2>) {
    let (min_zoom, max_zoom) = state.options.zoom_limits();
    match focus_screen {
        Some(focus) => {
            let viewport = state.view.viewport();
            state
                .view
                .map_view
                .zoom_towards(steps, focus, viewport, min_zoom, max_zoom);
        }
        None => state.view.map_view.zoom_by(steps, min_zoom, max_zoom),
    }
}

/// Übernimmt eine ausstehende Fit-to-Bounds-Anforderung der Szene.
pub fn apply_fit_request(state: &mut AppState) {
    let Some(bounds) = state.scene.take_fit_request() else {
        return;
    };
    let viewport = state.view.viewport();
    let (min_zoom, max_zoom) = state.options.zoom_limits();
    state.view.map_view.fit_bounds(
        bounds,
        viewport,
        state.options.fit_padding_px,
        min_zoom,
        max_zoom,
    );
    log::debug!(
        "Ausschnitt eingepasst: Mitte {}, Zoom {:.0}",
        state.view.map_view.center,
        state.view.map_view.zoom
    );
}
