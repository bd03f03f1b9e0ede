//! Use-Case-Funktionen für das Zeichnen der Strecke.

use crate::app::{AppState, NoticeKind};
use crate::core::{MarkerAction, Waypoint};
use std::time::Instant;

/// Hängt einen Wegpunkt an. Nach dem zweiten Punkt erscheint der Bedienhinweis.
pub fn add_waypoint(state: &mut AppState, point: Waypoint) {
    if !state.editor.handle_map_click(&mut state.scene, point) {
        return;
    }

    if state.editor.route().len() == 2 {
        state.ui.notice.show(
            NoticeKind::PathHint,
            Instant::now(),
            state.options.notice_duration(),
        );
    }
}

/// Führt eine Marker-Aktion aus; schließt die Strecke ggf. ab.
pub fn trigger_marker_action(state: &mut AppState, action: MarkerAction) {
    if state.editor.handle_marker_action(&mut state.scene, action) {
        state.ui.notice.hide_kind(NoticeKind::PathHint);
    } else {
        log::debug!("Marker-Aktion {:?} ohne Wirkung", action);
    }
}

/// Verwirft die Strecke samt Routing-Vorschau.
pub fn reset_path(state: &mut AppState) {
    state.editor.reset(&mut state.scene);
    state.scene.set_snapped_line(None);
    state.ui.notice.hide_kind(NoticeKind::PathHint);
    log::info!("Strecke zurückgesetzt");
}
