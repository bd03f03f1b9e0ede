//! Retained-Szene für Marker und Linien inklusive Klick-Abonnements.

use super::MapRenderer;
use crate::core::{GeoBounds, LineId, MapView, MarkerAction, MarkerId, MarkerStyle, Waypoint};
use glam::DVec2;
use indexmap::IndexMap;

/// Ein Marker in der Szene.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneMarker {
    /// Geografische Position
    pub position: Waypoint,
    /// Darstellungsstil
    pub style: MarkerStyle,
    /// Abonnierte Klick-Aktion (None = nicht klickbar)
    pub on_click: Option<MarkerAction>,
}

/// In-Process-Implementierung von [`MapRenderer`].
///
/// Einfügereihenfolge = Zeichenreihenfolge.
#[derive(Debug, Default)]
pub struct MapScene {
    markers: IndexMap<MarkerId, SceneMarker>,
    lines: IndexMap<LineId, Vec<Waypoint>>,
    snapped_line: Option<Vec<Waypoint>>,
    pending_fit: Option<GeoBounds>,
    next_id: u64,
}

impl MapScene {
    /// Erstellt eine leere Szene.
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// Alle Marker in Zeichenreihenfolge.
    pub fn markers(&self) -> impl Iterator<Item = (MarkerId, &SceneMarker)> {
        self.markers.iter().map(|(id, marker)| (*id, marker))
    }

    /// Marker per ID.
    pub fn marker(&self, id: MarkerId) -> Option<&SceneMarker> {
        self.markers.get(&id)
    }

    /// Anzahl der Marker.
    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// Alle Linien in Zeichenreihenfolge.
    pub fn lines(&self) -> impl Iterator<Item = (LineId, &[Waypoint])> {
        self.lines.iter().map(|(id, points)| (*id, points.as_slice()))
    }

    /// Koordinaten einer Linie.
    pub fn line(&self, id: LineId) -> Option<&[Waypoint]> {
        self.lines.get(&id).map(Vec::as_slice)
    }

    /// Anzahl der Linien.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Abonnierte Aktion eines Markers.
    pub fn click_action(&self, id: MarkerId) -> Option<MarkerAction> {
        self.markers.get(&id).and_then(|marker| marker.on_click)
    }

    /// Straßengenaue Linie eines Snapping-Dienstes (falls vorhanden).
    pub fn snapped_line(&self) -> Option<&[Waypoint]> {
        self.snapped_line.as_deref()
    }

    /// Setzt oder entfernt die straßengenaue Linie.
    pub fn set_snapped_line(&mut self, points: Option<Vec<Waypoint>>) {
        self.snapped_line = points;
    }

    /// Entnimmt eine ausstehende Fit-to-Bounds-Anforderung.
    pub fn take_fit_request(&mut self) -> Option<GeoBounds> {
        self.pending_fit.take()
    }

    /// Sucht den obersten Marker innerhalb von `hit_radius_px` um `screen_pos`.
    ///
    /// Zuletzt gezeichnete Marker liegen oben und gewinnen.
    pub fn marker_at(
        &self,
        view: &MapView,
        viewport_size: DVec2,
        screen_pos: DVec2,
        hit_radius_px: f64,
    ) -> Option<MarkerId> {
        self.markers
            .iter()
            .rev()
            .find(|(_, marker)| {
                view.geo_to_screen(marker.position, viewport_size)
                    .distance(screen_pos)
                    <= hit_radius_px
            })
            .map(|(id, _)| *id)
    }
}

impl MapRenderer for MapScene {
    fn add_marker(&mut self, position: Waypoint, style: MarkerStyle) -> MarkerId {
        let id = MarkerId(self.allocate_id());
        self.markers.insert(
            id,
            SceneMarker {
                position,
                style,
                on_click: None,
            },
        );
        id
    }

    fn remove_marker(&mut self, id: MarkerId) {
        if self.markers.shift_remove(&id).is_none() {
            log::debug!("remove_marker: unbekannter Marker {:?}", id);
        }
    }

    fn subscribe_marker_click(&mut self, id: MarkerId, action: MarkerAction) {
        match self.markers.get_mut(&id) {
            Some(marker) => marker.on_click = Some(action),
            None => log::warn!("Klick-Abo für unbekannten Marker {:?} ignoriert", id),
        }
    }

    fn unsubscribe_marker_click(&mut self, id: MarkerId) {
        if let Some(marker) = self.markers.get_mut(&id) {
            marker.on_click = None;
        }
    }

    fn create_line(&mut self) -> LineId {
        let id = LineId(self.allocate_id());
        self.lines.insert(id, Vec::new());
        id
    }

    fn set_line_points(&mut self, id: LineId, points: &[Waypoint]) {
        match self.lines.get_mut(&id) {
            Some(line) => {
                line.clear();
                line.extend_from_slice(points);
            }
            None => log::warn!("set_line_points: unbekannte Linie {:?}", id),
        }
    }

    fn remove_line(&mut self, id: LineId) {
        self.lines.shift_remove(&id);
    }

    fn fit_bounds(&mut self, bounds: GeoBounds) {
        self.pending_fit = Some(bounds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> DVec2 {
        DVec2::new(800.0, 600.0)
    }

    #[test]
    fn test_subscribe_and_unsubscribe() {
        let mut scene = MapScene::new();
        let id = scene.add_marker(Waypoint::new(1.0, 1.0), MarkerStyle::Start);
        assert_eq!(scene.click_action(id), None);

        scene.subscribe_marker_click(id, MarkerAction::CloseAsLoop);
        assert_eq!(scene.click_action(id), Some(MarkerAction::CloseAsLoop));

        scene.unsubscribe_marker_click(id);
        assert_eq!(scene.click_action(id), None);
        assert_eq!(scene.marker_count(), 1);
    }

    #[test]
    fn test_removed_marker_has_no_action() {
        let mut scene = MapScene::new();
        let id = scene.add_marker(Waypoint::new(1.0, 1.0), MarkerStyle::Finish);
        scene.subscribe_marker_click(id, MarkerAction::CloseOpen);
        scene.remove_marker(id);
        assert_eq!(scene.click_action(id), None);
        assert_eq!(scene.marker_count(), 0);
    }

    #[test]
    fn test_marker_and_line_ids_are_unique() {
        let mut scene = MapScene::new();
        let line = scene.create_line();
        let marker = scene.add_marker(Waypoint::new(0.0, 0.0), MarkerStyle::Start);
        assert_ne!(line.0, marker.0);
    }

    #[test]
    fn test_set_line_points_replaces() {
        let mut scene = MapScene::new();
        let line = scene.create_line();
        scene.set_line_points(line, &[Waypoint::new(1.0, 1.0), Waypoint::new(2.0, 2.0)]);
        scene.set_line_points(line, &[Waypoint::new(3.0, 3.0)]);
        assert_eq!(scene.line(line), Some(&[Waypoint::new(3.0, 3.0)][..]));

        scene.remove_line(line);
        assert_eq!(scene.line(line), None);
    }

    #[test]
    fn test_marker_at_prefers_topmost() {
        let mut scene = MapScene::new();
        let view = MapView::new(Waypoint::new(48.0, 11.0), 12.0);
        let bottom = scene.add_marker(view.center, MarkerStyle::Start);
        let top = scene.add_marker(view.center, MarkerStyle::Finish);

        let hit = scene.marker_at(&view, viewport(), DVec2::new(403.0, 298.0), 10.0);
        assert_eq!(hit, Some(top));
        assert_ne!(hit, Some(bottom));
    }

    #[test]
    fn test_marker_at_misses_outside_radius() {
        let mut scene = MapScene::new();
        let view = MapView::new(Waypoint::new(48.0, 11.0), 12.0);
        scene.add_marker(view.center, MarkerStyle::Start);

        let hit = scene.marker_at(&view, viewport(), DVec2::new(450.0, 300.0), 10.0);
        assert_eq!(hit, None);
    }

    #[test]
    fn test_fit_request_is_taken_once() {
        let mut scene = MapScene::new();
        scene.fit_bounds(GeoBounds::from_point(Waypoint::new(1.0, 2.0)));
        assert!(scene.take_fit_request().is_some());
        assert!(scene.take_fit_request().is_none());
    }
}
