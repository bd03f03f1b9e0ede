//! Run Path Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod editor;
pub mod geojson_io;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, NoticeKind, UiState, ViewState};
pub use core::{GeoBounds, MapView, MarkerAction, MarkerId, MarkerStyle, Route, Waypoint};
pub use editor::{PathEditor, QueuedSnapper, RouteSnapper, TerminalMarker};
pub use geojson_io::{parse_path_geojson, write_path_geojson, ExportError, ImportError};
pub use render::{MapRenderer, MapScene};
pub use shared::EditorOptions;
