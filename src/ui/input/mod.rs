//! Viewport-Input-Handling: Maus-Events und Scroll → AppIntent.
//!
//! Aufgeteilt in Submodule:
//! - `clicks` — Primärklick (Punkt setzen oder Marker-Aktion)
//! - `pointer_delta` — Karten-Pan während Drags
//! - `zoom` — Scroll-Zoom auf Mausposition

mod clicks;
mod pointer_delta;
mod zoom;

use super::keyboard;
use crate::app::AppIntent;
use crate::shared::EditorOptions;
use glam::DVec2;

/// Bündelt die gemeinsamen Parameter für Viewport-Event-Verarbeitung.
pub(crate) struct ViewportContext<'a> {
    pub ui: &'a egui::Ui,
    pub response: &'a egui::Response,
    pub options: &'a EditorOptions,
}

/// Rechnet eine egui-Bildschirmposition in Viewport-Pixel (relativ zu `rect.min`) um.
pub(crate) fn local_screen_pos(pos: egui::Pos2, response: &egui::Response) -> DVec2 {
    let local = pos - response.rect.min;
    DVec2::new(f64::from(local.x), f64::from(local.y))
}

/// Verwaltet den Input-Zustand für das Viewport
#[derive(Default)]
pub struct InputState {
    last_cursor: Option<DVec2>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self { last_cursor: None }
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Zentraler UI→Intent-Einstieg für Maus-, Scroll- und Tastatur-Eingaben
    /// im Kartenbereich.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
        options: &EditorOptions,
    ) -> Vec<AppIntent> {
        let ctx = ViewportContext {
            ui,
            response,
            options,
        };

        let mut events = Vec::new();

        events.push(AppIntent::ViewportResized {
            size: viewport_size,
        });

        events.extend(keyboard::collect_keyboard_intents(ui));

        self.handle_clicks(&ctx, &mut events);
        self.handle_pointer_delta(&ctx, &mut events);
        self.handle_scroll_zoom(&ctx, &mut events);
        self.track_cursor(&ctx, &mut events);

        events
    }

    /// Meldet Cursor-Änderungen für die Statusleiste (nur bei Bewegung).
    fn track_cursor(&mut self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        let cursor = ctx
            .response
            .hover_pos()
            .map(|pos| local_screen_pos(pos, ctx.response));
        if cursor != self.last_cursor {
            self.last_cursor = cursor;
            events.push(AppIntent::CursorMoved { screen_pos: cursor });
        }
    }
}
