use crate::shared::EditorOptions;
use glam::DVec2;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Primärklick in die Karte (Pixel relativ zur linken oberen Viewport-Ecke)
    MapClicked { screen_pos: DVec2 },
    /// Strecke als Runde schließen (Toolbar)
    CloseLoopRequested,
    /// Strecke offen abschließen (Toolbar)
    FinishPathRequested,
    /// Strecke verwerfen und neu beginnen
    ResetPathRequested,
    /// GeoJSON-Export anstoßen
    ExportRequested,
    /// Zielpfad im Speichern-Dialog gewählt
    ExportPathSelected { path: String },
    /// Speichern-Dialog abgebrochen
    ExportCancelled,
    /// GeoJSON-Import anstoßen (zeigt Dateidialog)
    ImportRequested,
    /// Datei im Öffnen-Dialog gewählt
    ImportFileSelected { path: String },
    /// Öffnen-Dialog ohne Auswahl geschlossen
    ImportCancelled,
    /// Blockierenden Hinweis bestätigt
    AlertDismissed,
    /// Transienten Hinweis weggeklickt
    NoticeDismissed,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Karte um ein Pixel-Delta verschieben
    CameraPan { delta: DVec2 },
    /// Zoom um `steps` Stufen, optional um einen Bildschirmpunkt
    CameraZoom {
        steps: f64,
        focus_screen: Option<DVec2>,
    },
    /// Mauszeiger über der Karte bewegt (None = außerhalb)
    CursorMoved { screen_pos: Option<DVec2> },
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Ansicht auf Startausschnitt zurücksetzen
    ResetViewRequested,
    /// Optionen-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Optionen-Dialog schließen
    CloseOptionsDialogRequested,
    /// Geänderte Optionen übernehmen
    OptionsChanged { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
    /// Anwendung beenden
    ExitRequested,
}
