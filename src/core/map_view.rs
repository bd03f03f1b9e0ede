//! Karten-Ansicht mit Web-Mercator-Projektion für Pan, Zoom und Fit-to-Bounds.

use super::{GeoBounds, Waypoint};
use glam::DVec2;

/// Kantenlänge einer Kachel in Pixeln bei Zoom 0.
pub const TILE_SIZE: f64 = 256.0;
/// Maximale darstellbare Breite der Web-Mercator-Projektion.
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_59;

/// Projiziert einen Wegpunkt in normierte Mercator-Koordinaten (`0..1` je Achse).
pub fn project(point: Waypoint) -> DVec2 {
    let lat = point.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    let sin = lat.sin();
    DVec2::new(
        (point.lng + 180.0) / 360.0,
        0.5 - ((1.0 + sin) / (1.0 - sin)).ln() / (4.0 * std::f64::consts::PI),
    )
}

/// Inverse von [`project`].
pub fn unproject(world: DVec2) -> Waypoint {
    let n = std::f64::consts::PI * (1.0 - 2.0 * world.y);
    Waypoint::new(n.sinh().atan().to_degrees(), world.x * 360.0 - 180.0)
}

/// Kartenausschnitt: Mittelpunkt und (gebrochener) Zoom-Level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    /// Geografischer Mittelpunkt des Viewports
    pub center: Waypoint,
    /// Zoom-Level (0 = ganze Welt in einer Kachel)
    pub zoom: f64,
}

impl MapView {
    /// Erstellt eine Ansicht auf `center` mit Zoom `zoom`.
    pub fn new(center: Waypoint, zoom: f64) -> Self {
        Self { center, zoom }
    }

    /// Größe der Weltkarte in Pixeln beim aktuellen Zoom.
    pub fn world_size(&self) -> f64 {
        TILE_SIZE * self.zoom.exp2()
    }

    /// Rechnet einen Wegpunkt in Viewport-Pixel um (Ursprung oben links).
    pub fn geo_to_screen(&self, point: Waypoint, viewport_size: DVec2) -> DVec2 {
        (project(point) - project(self.center)) * self.world_size() + viewport_size * 0.5
    }

    /// Rechnet Viewport-Pixel in einen Wegpunkt um.
    pub fn screen_to_geo(&self, screen_pos: DVec2, viewport_size: DVec2) -> Waypoint {
        let offset = (screen_pos - viewport_size * 0.5) / self.world_size();
        unproject(clamp_world(project(self.center) + offset))
    }

    /// Verschiebt die Karte um ein Pixel-Delta (Drag-Richtung).
    pub fn pan_pixels(&mut self, delta: DVec2) {
        let world = project(self.center) - delta / self.world_size();
        self.center = unproject(clamp_world(world));
    }

    /// Ändert den Zoom um `delta` Stufen, begrenzt auf `[min_zoom, max_zoom]`.
    pub fn zoom_by(&mut self, delta: f64, min_zoom: f64, max_zoom: f64) {
        self.zoom = (self.zoom + delta).clamp(min_zoom, max_zoom);
    }

    /// Zoomt um `delta` Stufen, wobei der Punkt unter `focus` stabil bleibt.
    pub fn zoom_towards(
        &mut self,
        delta: f64,
        focus: DVec2,
        viewport_size: DVec2,
        min_zoom: f64,
        max_zoom: f64,
    ) {
        let focus_geo = self.screen_to_geo(focus, viewport_size);
        self.zoom_by(delta, min_zoom, max_zoom);
        let offset = (focus - viewport_size * 0.5) / self.world_size();
        self.center = unproject(clamp_world(project(focus_geo) - offset));
    }

    /// Passt Mittelpunkt und Zoom so an, dass `bounds` vollständig sichtbar ist.
    ///
    /// Der Zoom wird auf ganze Stufen abgerundet. Bei leerem Viewport wird nur
    /// zentriert.
    pub fn fit_bounds(
        &mut self,
        bounds: GeoBounds,
        viewport_size: DVec2,
        padding_px: f64,
        min_zoom: f64,
        max_zoom: f64,
    ) {
        let sw = project(bounds.south_west());
        let ne = project(bounds.north_east());
        self.center = unproject((sw + ne) * 0.5);

        if viewport_size.x <= 0.0 || viewport_size.y <= 0.0 {
            return;
        }

        let span = (ne - sw).abs() * TILE_SIZE;
        let available = (viewport_size - DVec2::splat(2.0 * padding_px)).max(DVec2::ONE);

        let zoom = if span.x <= f64::EPSILON && span.y <= f64::EPSILON {
            max_zoom
        } else {
            let scale_x = if span.x > f64::EPSILON { available.x / span.x } else { f64::MAX };
            let scale_y = if span.y > f64::EPSILON { available.y / span.y } else { f64::MAX };
            scale_x.min(scale_y).log2().floor()
        };
        self.zoom = zoom.clamp(min_zoom, max_zoom);
    }
}

fn clamp_world(world: DVec2) -> DVec2 {
    DVec2::new(world.x, world.y.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn viewport() -> DVec2 {
        DVec2::new(800.0, 600.0)
    }

    #[test]
    fn test_project_roundtrip() {
        let point = Waypoint::new(46.92292810003886, 2.3510742187500004);
        let back = unproject(project(point));
        assert_relative_eq!(back.lat, point.lat, epsilon = 1e-9);
        assert_relative_eq!(back.lng, point.lng, epsilon = 1e-9);
    }

    #[test]
    fn test_equator_projects_to_center() {
        let world = project(Waypoint::new(0.0, 0.0));
        assert_relative_eq!(world.x, 0.5);
        assert_relative_eq!(world.y, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_center_maps_to_viewport_center() {
        let view = MapView::new(Waypoint::new(48.0, 11.0), 6.0);
        let screen = view.geo_to_screen(view.center, viewport());
        assert_relative_eq!(screen.x, 400.0, epsilon = 1e-6);
        assert_relative_eq!(screen.y, 300.0, epsilon = 1e-6);
    }

    #[test]
    fn test_screen_to_geo_inverts_geo_to_screen() {
        let view = MapView::new(Waypoint::new(48.0, 11.0), 10.0);
        let point = Waypoint::new(48.01, 11.02);
        let screen = view.geo_to_screen(point, viewport());
        let back = view.screen_to_geo(screen, viewport());
        assert_relative_eq!(back.lat, point.lat, epsilon = 1e-9);
        assert_relative_eq!(back.lng, point.lng, epsilon = 1e-9);
    }

    #[test]
    fn test_pan_moves_center_against_drag() {
        let mut view = MapView::new(Waypoint::new(0.0, 0.0), 2.0);
        view.pan_pixels(DVec2::new(100.0, 0.0));
        assert!(view.center.lng < 0.0);
    }

    #[test]
    fn test_zoom_towards_keeps_focus_stable() {
        let mut view = MapView::new(Waypoint::new(48.0, 11.0), 8.0);
        let focus = DVec2::new(650.0, 120.0);
        let before = view.screen_to_geo(focus, viewport());
        view.zoom_towards(1.0, focus, viewport(), 1.0, 19.0);
        let after = view.screen_to_geo(focus, viewport());
        assert_relative_eq!(view.zoom, 9.0);
        assert_relative_eq!(after.lat, before.lat, epsilon = 1e-9);
        assert_relative_eq!(after.lng, before.lng, epsilon = 1e-9);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut view = MapView::new(Waypoint::new(0.0, 0.0), 18.5);
        view.zoom_by(3.0, 1.0, 19.0);
        assert_relative_eq!(view.zoom, 19.0);
    }

    #[test]
    fn test_fit_bounds_contains_corners() {
        let mut view = MapView::new(Waypoint::new(0.0, 0.0), 1.0);
        let bounds = GeoBounds::from_points(&[Waypoint::new(48.1, 11.5), Waypoint::new(48.2, 11.7)])
            .expect("nicht leer");
        view.fit_bounds(bounds, viewport(), 20.0, 1.0, 19.0);

        assert_eq!(view.zoom, view.zoom.floor());
        for corner in [bounds.south_west(), bounds.north_east()] {
            let screen = view.geo_to_screen(corner, viewport());
            assert!(screen.x >= 0.0 && screen.x <= 800.0, "x ausserhalb: {}", screen.x);
            assert!(screen.y >= 0.0 && screen.y <= 600.0, "y ausserhalb: {}", screen.y);
        }
    }

    #[test]
    fn test_fit_bounds_single_point_uses_max_zoom() {
        let mut view = MapView::new(Waypoint::new(0.0, 0.0), 1.0);
        view.fit_bounds(
            GeoBounds::from_point(Waypoint::new(10.0, 10.0)),
            viewport(),
            20.0,
            1.0,
            19.0,
        );
        assert_relative_eq!(view.zoom, 19.0);
        assert_relative_eq!(view.center.lat, 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_fit_bounds_without_viewport_only_centers() {
        let mut view = MapView::new(Waypoint::new(0.0, 0.0), 5.0);
        let bounds = GeoBounds::from_points(&[Waypoint::new(-1.0, -1.0), Waypoint::new(1.0, 1.0)])
            .expect("nicht leer");
        view.fit_bounds(bounds, DVec2::ZERO, 20.0, 1.0, 19.0);
        assert_relative_eq!(view.zoom, 5.0);
        assert_relative_eq!(view.center.lat, 0.0, epsilon = 1e-9);
        assert_relative_eq!(view.center.lng, 0.0, epsilon = 1e-9);
    }
}
