use crate::core::{MapView, Waypoint};
use crate::shared::EditorOptions;
use glam::DVec2;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Kartenausschnitt (Mittelpunkt + Zoomstufe)
    pub map_view: MapView,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
    /// Mausposition über der Karte (Pixel relativ zum Viewport)
    pub cursor_screen: Option<DVec2>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::from_options(&EditorOptions::default())
    }
}

impl ViewState {
    /// Erstellt den View-Zustand mit dem konfigurierten Startausschnitt.
    pub fn from_options(options: &EditorOptions) -> Self {
        Self {
            map_view: Self::initial_map_view(options),
            viewport_size: [0.0, 0.0],
            cursor_screen: None,
        }
    }

    /// Startausschnitt laut Optionen.
    pub fn initial_map_view(options: &EditorOptions) -> MapView {
        MapView::new(
            Waypoint::new(options.initial_center_lat, options.initial_center_lng),
            options.initial_zoom,
        )
    }

    /// Viewport-Größe als `DVec2` für Projektionen.
    pub fn viewport(&self) -> DVec2 {
        DVec2::new(
            f64::from(self.viewport_size[0]),
            f64::from(self.viewport_size[1]),
        )
    }

    /// Geografische Position unter dem Mauszeiger.
    pub fn cursor_geo(&self) -> Option<Waypoint> {
        self.cursor_screen
            .map(|pos| self.map_view.screen_to_geo(pos, self.viewport()))
    }
}
