//! Handler für Datei-Operationen (GeoJSON-Import und -Export).

use crate::app::use_cases;
use crate::app::AppState;

/// Bereitet den Export vor oder zeigt den Hinweis für zu kurze Strecken.
pub fn request_export(state: &mut AppState) {
    use_cases::file_io::request_export(state);
}

/// Schreibt das vorbereitete GeoJSON nach `path`.
pub fn write_export(state: &mut AppState, path: String) -> anyhow::Result<()> {
    use_cases::file_io::write_export(state, path)
}

/// Verwirft einen vorbereiteten Export.
pub fn cancel_export(state: &mut AppState) {
    use_cases::file_io::cancel_export(state);
}

/// Öffnet den Datei-Öffnen-Dialog.
pub fn request_import(state: &mut AppState) {
    use_cases::file_io::request_import(state);
}

/// Importiert die GeoJSON-Datei unter `path`.
pub fn import(state: &mut AppState, path: String) {
    use_cases::file_io::import_file(state, path);
}

/// Zeigt den Alert für fehlende Dateiauswahl.
pub fn reject_missing_file(state: &mut AppState) {
    use_cases::file_io::reject_missing_file(state);
}
