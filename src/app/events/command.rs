use crate::core::{MarkerAction, Waypoint};
use crate::shared::EditorOptions;
use glam::DVec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Wegpunkt an geografischer Position anhängen
    AddWaypoint { point: Waypoint },
    /// Abonnierte Marker-Aktion ausführen (Runde schließen / abschließen)
    TriggerMarkerAction { action: MarkerAction },
    /// Strecke zurücksetzen
    ResetPath,
    /// GeoJSON erzeugen und Speichern-Dialog anfordern
    RequestExport,
    /// Vorbereitetes GeoJSON in Datei schreiben
    WriteExport { path: String },
    /// Vorbereiteten Export verwerfen
    CancelExport,
    /// Öffnen-Dialog anfordern
    RequestImportDialog,
    /// GeoJSON-Datei einlesen und Strecke ersetzen
    ImportFile { path: String },
    /// Alert für fehlende Dateiauswahl setzen
    RejectMissingImportFile,
    /// Alert schließen
    DismissAlert,
    /// Transienten Hinweis ausblenden
    DismissNotice,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Karte verschieben
    PanView { delta: DVec2 },
    /// Zoom ändern
    ZoomView {
        steps: f64,
        focus_screen: Option<DVec2>,
    },
    /// Cursorposition merken
    SetCursor { screen_pos: Option<DVec2> },
    /// Stufenweise hineinzoomen
    ZoomIn,
    /// Stufenweise herauszoomen
    ZoomOut,
    /// Startausschnitt wiederherstellen
    ResetView,
    /// Optionen-Dialog öffnen
    OpenOptionsDialog,
    /// Optionen-Dialog schließen
    CloseOptionsDialog,
    /// Optionen übernehmen und speichern
    ApplyOptions { options: EditorOptions },
    /// Optionen zurücksetzen und speichern
    ResetOptions,
    /// Anwendung beenden
    RequestExit,
}

impl AppCommand {
    /// Kurzbezeichnung für die Statusleiste.
    ///
    /// Reine Ansichts-Commands (Viewport, Cursor, Pan, Zoom) liefern `None`.
    pub fn label(&self) -> Option<&'static str> {
        let label = match self {
            Self::AddWaypoint { .. } => "Point added",
            Self::TriggerMarkerAction {
                action: MarkerAction::CloseAsLoop,
            } => "Close as loop",
            Self::TriggerMarkerAction {
                action: MarkerAction::CloseOpen,
            } => "Finish path",
            Self::ResetPath => "Reset path",
            Self::RequestExport => "Export requested",
            Self::WriteExport { .. } => "Export written",
            Self::CancelExport => "Export cancelled",
            Self::RequestImportDialog => "Import requested",
            Self::ImportFile { .. } => "Import",
            Self::RejectMissingImportFile => "Import cancelled",
            Self::ApplyOptions { .. } => "Options applied",
            Self::ResetOptions => "Options reset",
            Self::SetViewportSize { .. }
            | Self::PanView { .. }
            | Self::ZoomView { .. }
            | Self::SetCursor { .. }
            | Self::ZoomIn
            | Self::ZoomOut
            | Self::ResetView
            | Self::DismissAlert
            | Self::DismissNotice
            | Self::OpenOptionsDialog
            | Self::CloseOptionsDialog
            | Self::RequestExit => return None,
        };
        Some(label)
    }
}
