use crate::app::use_cases;
use crate::app::CommandLog;
use crate::editor::{PathEditor, QueuedSnapper};
use crate::render::MapScene;
use crate::shared::EditorOptions;

use super::{UiState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Strecken-Editor (Route, Marker-Handles, Zeichenzustand)
    pub editor: PathEditor,
    /// Gezeichnete Marker und Linien
    pub scene: MapScene,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Größen, Zoom-Grenzen)
    pub options: EditorOptions,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Warteschlange für Routing-Anfragen (nur bei aktiviertem Snapping)
    pub snap_queue: Option<QueuedSnapper>,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standardoptionen
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit den übergebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        let mut scene = MapScene::new();
        let editor = PathEditor::new(&mut scene);
        let mut state = Self {
            editor,
            scene,
            view: ViewState::from_options(&options),
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options,
            show_options_dialog: false,
            snap_queue: None,
            should_exit: false,
        };
        use_cases::snapping::configure(&mut state);
        state
    }

    /// Anzahl der Punkte der aktuellen Strecke (für UI-Anzeige)
    pub fn point_count(&self) -> usize {
        self.editor.route().len()
    }

    /// Gibt `true` zurück, solange weitere Punkte gesetzt werden können.
    pub fn is_drawing_open(&self) -> bool {
        self.editor.is_drawing_open()
    }

    /// Gibt `true` zurück, wenn ein Export möglich ist.
    pub fn can_export(&self) -> bool {
        self.editor.route().has_segment()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
