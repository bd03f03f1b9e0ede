//! Core-Domänentypen: Wegpunkte, Route, Bounding Box, Layer-Handles, Kartenansicht.

pub mod bounds;
pub mod layer;
pub mod map_view;
pub mod route;
pub mod waypoint;

pub use bounds::GeoBounds;
pub use layer::{LineId, MarkerAction, MarkerId, MarkerStyle};
pub use map_view::MapView;
pub use route::Route;
pub use waypoint::Waypoint;
