use crate::app::{AppIntent, UiState};
use crate::shared::EditorOptions;

const GEOJSON_FILTER_NAME: &str = "GeoJSON";
const GEOJSON_EXTENSIONS: &[&str] = &["geojson", "json"];

fn path_to_ui_string(path: &std::path::Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Verarbeitet ausstehende Datei-Dialoge und gibt AppIntents zurück.
pub fn handle_file_dialogs(ui_state: &mut UiState, options: &EditorOptions) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Import: Öffnen-Dialog
    if ui_state.show_import_dialog {
        ui_state.show_import_dialog = false;

        match rfd::FileDialog::new()
            .add_filter(GEOJSON_FILTER_NAME, GEOJSON_EXTENSIONS)
            .pick_file()
        {
            Some(path) => events.push(AppIntent::ImportFileSelected {
                path: path_to_ui_string(&path),
            }),
            None => events.push(AppIntent::ImportCancelled),
        }
    }

    // Export: Speichern-Dialog
    if ui_state.show_export_dialog {
        ui_state.show_export_dialog = false;

        match rfd::FileDialog::new()
            .add_filter(GEOJSON_FILTER_NAME, GEOJSON_EXTENSIONS)
            .set_file_name(options.export_file_name.as_str())
            .save_file()
        {
            Some(path) => events.push(AppIntent::ExportPathSelected {
                path: path_to_ui_string(&path),
            }),
            None => events.push(AppIntent::ExportCancelled),
        }
    }

    events
}
