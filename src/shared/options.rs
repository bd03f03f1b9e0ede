//! Zentrale Konfiguration für den Run Path Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Karte ───────────────────────────────────────────────────────────

/// Breitengrad des Startausschnitts (Frankreich).
pub const INITIAL_CENTER_LAT: f64 = 46.922_928_100_038_86;
/// Längengrad des Startausschnitts.
pub const INITIAL_CENTER_LNG: f64 = 2.351_074_218_750_000_4;
/// Zoom-Level des Startausschnitts.
pub const INITIAL_ZOOM: f64 = 6.0;
/// Minimaler Zoom-Level.
pub const MIN_ZOOM: f64 = 1.0;
/// Maximaler Zoom-Level (entspricht der höchsten Kachelstufe).
pub const MAX_ZOOM: f64 = 19.0;
/// Zoom-Schritt bei Menü-Buttons / Shortcuts.
pub const ZOOM_STEP: f64 = 1.0;
/// Zoom-Stufen pro Scroll-Pixel.
pub const SCROLL_ZOOM_PER_PIXEL: f64 = 0.01;
/// Rand in Pixeln beim Einpassen importierter Strecken.
pub const FIT_PADDING_PX: f64 = 24.0;

// ── Darstellung ─────────────────────────────────────────────────────

/// Linienfarbe der Strecke (RGBA: Orange).
pub const PATH_COLOR: [f32; 4] = [0.95, 0.45, 0.1, 1.0];
/// Linienfarbe der straßengenauen Strecke (RGBA: Blau).
pub const SNAPPED_PATH_COLOR: [f32; 4] = [0.2, 0.5, 1.0, 0.8];
/// Linienbreite in Pixeln.
pub const PATH_WIDTH_PX: f32 = 4.0;
/// Farbe des Start-Markers (RGBA: Grün).
pub const START_MARKER_COLOR: [f32; 4] = [0.1, 0.7, 0.2, 1.0];
/// Farbe des Ziel-Markers (RGBA: Rot).
pub const FINISH_MARKER_COLOR: [f32; 4] = [0.85, 0.1, 0.1, 1.0];
/// Marker-Radius in Pixeln.
pub const MARKER_RADIUS_PX: f32 = 10.0;
/// Klick-Radius für Marker in Pixeln.
pub const MARKER_HIT_RADIUS_PX: f32 = 12.0;
/// Hintergrundfarbe der Karte.
pub const MAP_BACKGROUND_COLOR: [f32; 4] = [0.93, 0.92, 0.88, 1.0];
/// Farbe des Gradnetzes.
pub const GRATICULE_COLOR: [f32; 4] = [0.8, 0.8, 0.76, 1.0];

// ── Hinweise & Export ───────────────────────────────────────────────

/// Anzeigedauer transienter Hinweise in Millisekunden.
pub const NOTICE_DURATION_MS: u64 = 3000;
/// Standard-Dateiname beim Export.
pub const EXPORT_FILE_NAME: &str = "run_path.geojson";
/// Nachkommastellen der exportierten Koordinaten.
pub const GEOJSON_PRECISION: u32 = 6;

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `run_path_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorOptions {
    // ── Karte ───────────────────────────────────────────────────
    /// Breitengrad des Startausschnitts
    pub initial_center_lat: f64,
    /// Längengrad des Startausschnitts
    pub initial_center_lng: f64,
    /// Zoom-Level des Startausschnitts
    pub initial_zoom: f64,
    /// Minimaler Zoom-Level
    pub min_zoom: f64,
    /// Maximaler Zoom-Level
    pub max_zoom: f64,
    /// Zoom-Schritt bei Menü-Buttons / Shortcuts
    pub zoom_step: f64,
    /// Zoom-Stufen pro Scroll-Pixel
    pub scroll_zoom_per_pixel: f64,
    /// Rand beim Einpassen importierter Strecken
    pub fit_padding_px: f64,

    // ── Darstellung ─────────────────────────────────────────────
    /// Linienfarbe der Strecke (RGBA)
    pub path_color: [f32; 4],
    /// Linienfarbe der straßengenauen Strecke
    pub snapped_path_color: [f32; 4],
    /// Linienbreite in Pixeln
    pub path_width_px: f32,
    /// Farbe des Start-Markers
    pub start_marker_color: [f32; 4],
    /// Farbe des Ziel-Markers
    pub finish_marker_color: [f32; 4],
    /// Marker-Radius in Pixeln
    pub marker_radius_px: f32,
    /// Klick-Radius für Marker in Pixeln
    pub marker_hit_radius_px: f32,
    /// Hintergrundfarbe der Karte
    pub map_background_color: [f32; 4],
    /// Farbe des Gradnetzes
    pub graticule_color: [f32; 4],

    // ── Hinweise & Export ───────────────────────────────────────
    /// Anzeigedauer transienter Hinweise (ms)
    pub notice_duration_ms: u64,
    /// Vorgeschlagener Dateiname beim Export
    pub export_file_name: String,
    /// Nachkommastellen der exportierten Koordinaten
    pub geojson_precision: u32,
    /// Wegpunkte an einen externen Routing-Dienst weiterreichen
    pub snapping_enabled: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            initial_center_lat: INITIAL_CENTER_LAT,
            initial_center_lng: INITIAL_CENTER_LNG,
            initial_zoom: INITIAL_ZOOM,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            zoom_step: ZOOM_STEP,
            scroll_zoom_per_pixel: SCROLL_ZOOM_PER_PIXEL,
            fit_padding_px: FIT_PADDING_PX,

            path_color: PATH_COLOR,
            snapped_path_color: SNAPPED_PATH_COLOR,
            path_width_px: PATH_WIDTH_PX,
            start_marker_color: START_MARKER_COLOR,
            finish_marker_color: FINISH_MARKER_COLOR,
            marker_radius_px: MARKER_RADIUS_PX,
            marker_hit_radius_px: MARKER_HIT_RADIUS_PX,
            map_background_color: MAP_BACKGROUND_COLOR,
            graticule_color: GRATICULE_COLOR,

            notice_duration_ms: NOTICE_DURATION_MS,
            export_file_name: EXPORT_FILE_NAME.to_string(),
            geojson_precision: GEOJSON_PRECISION,
            snapping_enabled: false,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("run_path_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("run_path_editor.toml")
    }

    /// Anzeigedauer transienter Hinweise.
    pub fn notice_duration(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.notice_duration_ms)
    }

    /// Zoom-Grenzen als `(min, max)`, auch bei vertauschten oder ungültigen Werten.
    pub fn zoom_limits(&self) -> (f64, f64) {
        let min = if self.min_zoom.is_finite() { self.min_zoom } else { MIN_ZOOM };
        let max = if self.max_zoom.is_finite() { self.max_zoom } else { MAX_ZOOM };
        (min.min(max), min.max(max))
    }

    /// Nachkommastellen für den Export, begrenzt auf sinnvolle f64-Genauigkeit.
    pub fn export_precision(&self) -> u32 {
        self.geojson_precision.min(15)
    }
}
