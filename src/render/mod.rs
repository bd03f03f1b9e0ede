//! Karten-Rendering: Renderer-Vertrag, Szene und egui-Painter.
//!
//! Der `PathEditor` spricht ausschließlich über [`MapRenderer`] mit der Darstellung.
//! [`MapScene`] hält die Layer als Retained-Szene, der Painter zeichnet sie pro Frame.

mod painter;
mod scene;

pub use painter::paint_scene;
pub use scene::{MapScene, SceneMarker};

use crate::core::{GeoBounds, LineId, MarkerAction, MarkerId, MarkerStyle, Waypoint};

/// Vertrag zwischen Editor und Kartendarstellung.
///
/// Marker-Klicks werden explizit abonniert; ein Marker ohne Abonnement
/// schluckt Klicks, löst aber keine Aktion aus.
pub trait MapRenderer {
    /// Fügt einen Marker an `position` hinzu.
    fn add_marker(&mut self, position: Waypoint, style: MarkerStyle) -> MarkerId;
    /// Entfernt einen Marker. Unbekannte IDs werden ignoriert.
    fn remove_marker(&mut self, id: MarkerId);
    /// Bindet einen Klick auf den Marker an eine Aktion (ersetzt ein bestehendes Abo).
    fn subscribe_marker_click(&mut self, id: MarkerId, action: MarkerAction);
    /// Löst die Klick-Bindung eines Markers.
    fn unsubscribe_marker_click(&mut self, id: MarkerId);
    /// Legt eine leere Linie an.
    fn create_line(&mut self) -> LineId;
    /// Ersetzt die Koordinatenfolge einer Linie.
    fn set_line_points(&mut self, id: LineId, points: &[Waypoint]);
    /// Entfernt eine Linie.
    fn remove_line(&mut self, id: LineId);
    /// Fordert an, den Viewport auf `bounds` einzupassen.
    fn fit_bounds(&mut self, bounds: GeoBounds);
}
