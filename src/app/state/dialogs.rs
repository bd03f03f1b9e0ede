use crate::app::notice::TransientNotice;

/// UI-bezogener Anwendungszustand
#[derive(Debug, Default)]
pub struct UiState {
    /// Ob der Öffnen-Dialog für den Import gezeigt werden soll
    pub show_import_dialog: bool,
    /// Ob der Speichern-Dialog für den Export gezeigt werden soll
    pub show_export_dialog: bool,
    /// Bereits serialisiertes GeoJSON, das auf einen Zielpfad wartet
    pub pending_export: Option<String>,
    /// Blockierender Hinweis (muss bestätigt werden)
    pub alert: Option<String>,
    /// Transienter Hinweis mit Ablauffrist
    pub notice: TransientNotice,
    /// Zuletzt importierte oder exportierte Datei
    pub current_file_path: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand (alle Dialoge geschlossen).
    pub fn new() -> Self {
        Self {
            show_import_dialog: false,
            show_export_dialog: false,
            pending_export: None,
            alert: None,
            notice: TransientNotice::new(),
            current_file_path: None,
        }
    }
}
