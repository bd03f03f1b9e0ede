//! Pointer-Delta-Verarbeitung: Karten-Pan.

use super::{InputState, ViewportContext};
use crate::app::AppIntent;
use glam::DVec2;

impl InputState {
    /// Verschiebt die Karte bei Drag mit linker, mittlerer oder rechter Maustaste.
    pub(crate) fn handle_pointer_delta(&self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        let pointer_delta = ctx.ui.input(|i| i.pointer.delta());
        if pointer_delta == egui::Vec2::ZERO {
            return;
        }

        if ctx.response.dragged_by(egui::PointerButton::Primary)
            || ctx.response.dragged_by(egui::PointerButton::Middle)
            || ctx.response.dragged_by(egui::PointerButton::Secondary)
        {
            events.push(AppIntent::CameraPan {
                delta: DVec2::new(f64::from(pointer_delta.x), f64::from(pointer_delta.y)),
            });
        }
    }
}
