//! GeoJSON Import/Export für gezeichnete Strecken.
//!
//! Eine Strecke wird als `FeatureCollection` gespeichert: Start-Punkt,
//! optional Ziel-Punkt, danach die `LineString` mit der vollständigen Punktfolge.

pub mod parser;
pub mod writer;

pub use parser::{parse_path_geojson, ImportedPath};
pub use writer::{write_path_geojson, PathFeatures};

/// Fehler beim Einlesen einer GeoJSON-Datei.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// Text ist syntaktisch kein JSON
    #[error("Datei ist kein gültiges JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    /// JSON ist gültig, aber kein GeoJSON-Objekt
    #[error("JSON ist kein GeoJSON-Objekt: {0}")]
    InvalidGeoJson(#[from] geojson::Error),
}

/// Fehler beim Erzeugen einer GeoJSON-Datei.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Weniger als zwei Punkte: keine Linie vorhanden
    #[error("Export benötigt mindestens zwei Punkte (vorhanden: {points})")]
    InsufficientRoute {
        /// Anzahl der vorhandenen Punkte
        points: usize,
    },
    /// Serialisierung fehlgeschlagen
    #[error("GeoJSON-Serialisierung fehlgeschlagen: {0}")]
    Serialize(#[from] serde_json::Error),
}
