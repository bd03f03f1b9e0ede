//! Writer für Strecken als GeoJSON-`FeatureCollection`.

use super::ExportError;
use crate::core::Waypoint;
use geojson::{Feature, FeatureCollection, GeoJson, Geometry, JsonObject, Value};

/// Zu exportierende Features einer Strecke.
#[derive(Debug, Clone, Copy)]
pub struct PathFeatures<'a> {
    /// Position des Start-Markers
    pub start: Waypoint,
    /// Position des Ziel-Markers; `None` wenn Start und Ziel derselbe Marker sind
    pub terminal: Option<Waypoint>,
    /// Vollständige Punktfolge der Linie
    pub line: &'a [Waypoint],
}

fn position(point: Waypoint, precision: Option<u32>) -> Vec<f64> {
    match precision {
        Some(decimals) => point.rounded(decimals).to_position(),
        None => point.to_position(),
    }
}

fn feature(value: Value) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(value)),
        id: None,
        properties: Some(JsonObject::new()),
        foreign_members: None,
    }
}

/// Baut die `FeatureCollection` einer Strecke.
///
/// Reihenfolge: Start-Punkt, Ziel-Punkt (falls getrennt), Linie.
pub fn build_feature_collection(
    path: &PathFeatures<'_>,
    precision: Option<u32>,
) -> FeatureCollection {
    let mut features = Vec::with_capacity(3);
    features.push(feature(Value::Point(position(path.start, precision))));
    if let Some(terminal) = path.terminal {
        features.push(feature(Value::Point(position(terminal, precision))));
    }
    features.push(feature(Value::LineString(
        path.line.iter().map(|p| position(*p, precision)).collect(),
    )));

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

/// Serialisiert eine Strecke als GeoJSON-Text.
///
/// `precision` rundet Koordinaten auf die angegebene Anzahl Nachkommastellen.
pub fn write_path_geojson(
    path: &PathFeatures<'_>,
    precision: Option<u32>,
) -> Result<String, ExportError> {
    let collection = build_feature_collection(path, precision);
    Ok(serde_json::to_string(&GeoJson::FeatureCollection(collection))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn line() -> Vec<Waypoint> {
        vec![
            Waypoint::new(1.0, 1.0),
            Waypoint::new(2.0, 2.0),
            Waypoint::new(3.0, 1.5),
        ]
    }

    #[test]
    fn test_open_path_writes_start_finish_and_line() {
        let line = line();
        let text = write_path_geojson(
            &PathFeatures {
                start: line[0],
                terminal: Some(line[2]),
                line: &line,
            },
            None,
        )
        .expect("Export sollte gelingen");

        let value: serde_json::Value = serde_json::from_str(&text).expect("gültiges JSON");
        assert_eq!(value["type"], "FeatureCollection");
        let features = value["features"].as_array().expect("features-Array");
        assert_eq!(features.len(), 3);
        assert_eq!(features[0]["geometry"]["type"], "Point");
        assert_eq!(features[0]["geometry"]["coordinates"], json!([1.0, 1.0]));
        assert_eq!(features[1]["geometry"]["coordinates"], json!([1.5, 3.0]));
        assert_eq!(features[2]["geometry"]["type"], "LineString");
        assert_eq!(
            features[2]["geometry"]["coordinates"],
            json!([[1.0, 1.0], [2.0, 2.0], [1.5, 3.0]])
        );
        assert_eq!(features[0]["properties"], json!({}));
    }

    #[test]
    fn test_coincident_terminal_is_written_once() {
        let mut line = line();
        line.push(line[0]);
        let collection = build_feature_collection(
            &PathFeatures {
                start: line[0],
                terminal: None,
                line: &line,
            },
            None,
        );
        assert_eq!(collection.features.len(), 2);
    }

    #[test]
    fn test_precision_rounds_coordinates() {
        let line = vec![
            Waypoint::new(46.922928100038, 2.351074218750),
            Waypoint::new(46.9, 2.4),
        ];
        let text = write_path_geojson(
            &PathFeatures {
                start: line[0],
                terminal: Some(line[1]),
                line: &line,
            },
            Some(6),
        )
        .expect("Export sollte gelingen");
        assert!(text.contains("2.351074"));
        assert!(text.contains("46.922928"));
        assert!(!text.contains("46.922928100038"));
    }
}
