//! Use-Case-Funktionen für Dateiaktionen.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use crate::app::{AppState, NoticeKind};
use crate::geojson_io::ExportError;
use anyhow::Context;
use std::time::Instant;

/// Alert, wenn der Öffnen-Dialog ohne Auswahl geschlossen wurde.
pub const NO_FILE_SELECTED_ALERT: &str = "Please select a GeoJSON file.";
/// Alert für unlesbare oder ungültige Import-Dateien.
pub const INVALID_FILE_ALERT: &str = "Invalid GeoJSON file.";

/// Serialisiert die Strecke und fordert den Speichern-Dialog an.
///
/// Bei weniger als zwei Punkten erscheint stattdessen ein transienter Hinweis;
/// es wird keine Datei erzeugt.
pub fn request_export(state: &mut AppState) {
    match state
        .editor
        .export_geojson(Some(state.options.export_precision()))
    {
        Ok(text) => {
            state.ui.pending_export = Some(text);
            state.ui.show_export_dialog = true;
        }
        Err(ExportError::InsufficientRoute { points }) => {
            log::info!("Export abgelehnt: nur {} Punkt(e)", points);
            state.ui.notice.show(
                NoticeKind::ExportBlocked,
                Instant::now(),
                state.options.notice_duration(),
            );
        }
        Err(e) => {
            log::error!("Export fehlgeschlagen: {}", e);
            state.ui.alert = Some(format!("Export failed: {}", e));
        }
    }
}

/// Schreibt das vorbereitete (oder frisch erzeugte) GeoJSON in eine Datei.
pub fn write_export(state: &mut AppState, path: String) -> anyhow::Result<()> {
    let text = match state.ui.pending_export.take() {
        Some(text) => text,
        None => state
            .editor
            .export_geojson(Some(state.options.export_precision()))?,
    };

    std::fs::write(&path, text)
        .with_context(|| format!("GeoJSON konnte nicht geschrieben werden: {}", path))?;
    log::info!("GeoJSON gespeichert: {}", path);
    state.ui.current_file_path = Some(path);
    Ok(())
}

/// Verwirft einen vorbereiteten Export.
pub fn cancel_export(state: &mut AppState) {
    state.ui.pending_export = None;
    log::debug!("Export abgebrochen");
}

/// Öffnet den Open-Datei-Dialog über UI-State.
pub fn request_import(state: &mut AppState) {
    state.ui.show_import_dialog = true;
}

/// Zeigt den Alert für fehlende Dateiauswahl.
pub fn reject_missing_file(state: &mut AppState) {
    state.ui.alert = Some(NO_FILE_SELECTED_ALERT.to_string());
}

/// Liest eine GeoJSON-Datei ein und ersetzt die Strecke.
///
/// Unlesbare oder ungültige Dateien lassen die Strecke unverändert und
/// setzen einen blockierenden Alert.
pub fn import_file(state: &mut AppState, path: String) {
    let text = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) => {
            log::error!("Datei konnte nicht gelesen werden ({}): {}", path, e);
            state.ui.alert = Some(INVALID_FILE_ALERT.to_string());
            return;
        }
    };

    if let Err(e) = state.editor.import_geojson(&mut state.scene, &text) {
        log::error!("Import fehlgeschlagen ({}): {}", path, e);
        state.ui.alert = Some(INVALID_FILE_ALERT.to_string());
        return;
    }

    state.scene.set_snapped_line(None);
    state.ui.notice.hide();
    super::camera::apply_fit_request(state);
    log::info!("GeoJSON geladen: {}", path);
    state.ui.current_file_path = Some(path);
}
