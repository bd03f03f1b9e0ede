//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen, die `app`, `render` und `ui` gemeinsam lesen.

pub mod options;

pub use options::EditorOptions;
pub use options::{EXPORT_FILE_NAME, NOTICE_DURATION_MS};
