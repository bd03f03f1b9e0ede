//! Klick-Events im Viewport.

use super::{local_screen_pos, InputState, ViewportContext};
use crate::app::AppIntent;

impl InputState {
    /// Primärklick ohne Drag: Marker-Treffer oder neuer Punkt (Auflösung im Intent-Mapping).
    pub(crate) fn handle_clicks(&self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if !ctx.response.clicked() {
            return;
        }

        if let Some(pos) = ctx.response.interact_pointer_pos() {
            events.push(AppIntent::MapClicked {
                screen_pos: local_screen_pos(pos, ctx.response),
            });
        }
    }
}
