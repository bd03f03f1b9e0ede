//! Parser für GeoJSON-Strecken.
//!
//! Akzeptiert `FeatureCollection`, einzelne `Feature`s und nackte Geometrien.
//! Nicht unterstützte Geometrien werden übersprungen und protokolliert.


use super::ImportError;
use crate::core::{GeoBounds, Waypoint};
use geojson::{Feature, GeoJson, Geometry, Value};

/// Ergebnis eines GeoJSON-Imports.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportedPath {
    /// Punkt-Features in Dokumentreihenfolge (Marker)
    pub points: Vec<Waypoint>,
    /// Koordinaten aller Linien-Features, aneinandergehängt
    pub line: Vec<Waypoint>,
    /// Anzahl übersprungener Features/Geometrien
    pub skipped: usize,
}

impl ImportedPath {
    /// Punktfolge der Route: die Linie, ersatzweise die Punkt-Features.
    pub fn route_points(&self) -> Vec<Waypoint> {
        if self.line.is_empty() {
            self.points.clone()
        } else {
            self.line.clone()
        }
    }

    /// Bounding Box über alle importierten Koordinaten.
    pub fn bounds(&self) -> Option<GeoBounds> {
        GeoBounds::from_points(self.points.iter().chain(self.line.iter()))
    }
}

/// Liest eine Strecke aus GeoJSON-Text.
///
/// Syntaxfehler und Nicht-GeoJSON-Objekte führen zu einem [`ImportError`];
/// semantisch leere Dokumente liefern ein leeres [`ImportedPath`].
pub fn parse_path_geojson(text: &str) -> Result<ImportedPath, ImportError> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    let document = GeoJson::from_json_value(value)?;

    let features = match document {
        GeoJson::FeatureCollection(collection) => collection.features,
        GeoJson::Feature(feature) => vec![feature],
        GeoJson::Geometry(geometry) => vec![Feature::from(geometry)],
    };

    let mut path = ImportedPath::default();
    let mut line_features = 0usize;
    for (index, feature) in features.iter().enumerate() {
        match &feature.geometry {
            Some(geometry) => {
                if collect_geometry(geometry, &mut path) {
                    line_features += 1;
                }
            }
            None => {
                log::warn!("Feature {} ohne Geometrie übersprungen", index);
                path.skipped += 1;
            }
        }
    }

    if line_features > 1 {
        log::warn!(
            "{} Linien-Features gefunden, Koordinaten werden aneinandergehängt",
            line_features
        );
    }

    log::debug!(
        "GeoJSON gelesen: {} Punkte, {} Linienkoordinaten, {} übersprungen",
        path.points.len(),
        path.line.len(),
        path.skipped
    );

    Ok(path)
}

/// Übernimmt eine Geometrie. Gibt `true` zurück, wenn Linienkoordinaten hinzukamen.
fn collect_geometry(geometry: &Geometry, path: &mut ImportedPath) -> bool {
    match &geometry.value {
        Value::Point(position) => {
            match Waypoint::from_position(position) {
                Some(point) => path.points.push(point),
                None => skip(path, "Point mit ungültiger Position"),
            }
            false
        }
        Value::LineString(positions) => append_line(path, positions),
        Value::MultiLineString(parts) => parts
            .iter()
            .fold(false, |added, part| append_line(path, part) || added),
        Value::GeometryCollection(geometries) => geometries
            .iter()
            .fold(false, |added, inner| collect_geometry(inner, path) || added),
        Value::MultiPoint(_) => {
            skip(path, "MultiPoint");
            false
        }
        Value::Polygon(_) | Value::MultiPolygon(_) => {
            skip(path, "Polygon");
            false
        }
    }
}

fn append_line(path: &mut ImportedPath, positions: &[Vec<f64>]) -> bool {
    let before = path.line.len();
    for position in positions {
        match Waypoint::from_position(position) {
            Some(point) => path.line.push(point),
            None => skip(path, "Linienkoordinate mit ungültiger Position"),
        }
    }
    path.line.len() > before
}

fn skip(path: &mut ImportedPath, what: &str) {
    log::warn!("Nicht unterstützte Geometrie übersprungen: {}", what);
    path.skipped += 1;
}
