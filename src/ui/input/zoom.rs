//! Scroll-Zoom auf Mausposition.

use super::{local_screen_pos, InputState, ViewportContext};
use crate::app::AppIntent;

impl InputState {
    /// Verarbeitet Scroll-Zoom auf die aktuelle Mausposition.
    pub(crate) fn handle_scroll_zoom(&self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if !ctx.response.hovered() {
            return;
        }
        let scroll = ctx.ui.input(|i| i.smooth_scroll_delta.y);
        if scroll == 0.0 {
            return;
        }

        let steps = f64::from(scroll) * ctx.options.scroll_zoom_per_pixel;
        let focus_screen = ctx
            .response
            .hover_pos()
            .map(|pos| local_screen_pos(pos, ctx.response));
        events.push(AppIntent::CameraZoom {
            steps,
            focus_screen,
        });
    }
}
