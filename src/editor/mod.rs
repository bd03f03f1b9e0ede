//! Strecken-Editor: Zustandsautomat für Zeichnen, Schließen, Zurücksetzen,
//! Import und Export einer Laufstrecke.

mod path_editor;
mod snapping;

pub use path_editor::{PathEditor, PlacedMarker, TerminalMarker};
pub use snapping::{QueuedSnapper, RouteSnapper};
