//! Zustandsautomat des Strecken-Editors.

use super::RouteSnapper;
use crate::core::{LineId, MarkerAction, MarkerId, MarkerStyle, Route, Waypoint};
use crate::geojson_io::{self, ExportError, ImportError, PathFeatures};
use crate::render::MapRenderer;

/// Ein platzierter Marker mit Handle und Position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedMarker {
    /// Handle im Renderer
    pub id: MarkerId,
    /// Geografische Position
    pub position: Waypoint,
}

/// Beziehung zwischen Start- und Ziel-Marker.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TerminalMarker {
    /// Noch kein Ziel (0 oder 1 Punkt gezeichnet)
    #[default]
    None,
    /// Eigener Ziel-Marker am zuletzt gesetzten Punkt
    Separate(PlacedMarker),
    /// Start-Marker ist zugleich Ziel (Runde oder Einzelpunkt)
    Coincident,
}

/// Besitzt die gezeichnete Route und steuert Marker und Linie im Renderer.
///
/// Der Renderer wird pro Aufruf übergeben; der Editor hält nur Handles.
pub struct PathEditor {
    route: Route,
    start: Option<PlacedMarker>,
    terminal: TerminalMarker,
    line: LineId,
    drawing_open: bool,
    snapper: Option<Box<dyn RouteSnapper>>,
}

impl PathEditor {
    /// Erstellt einen leeren, zeichenbereiten Editor mit frischer Linie.
    pub fn new(renderer: &mut dyn MapRenderer) -> Self {
        Self {
            route: Route::new(),
            start: None,
            terminal: TerminalMarker::None,
            line: renderer.create_line(),
            drawing_open: true,
            snapper: None,
        }
    }

    /// Hängt einen Routing-Dienst an, der bei jeder Routenänderung benachrichtigt wird.
    pub fn with_snapper(mut self, snapper: Box<dyn RouteSnapper>) -> Self {
        self.snapper = Some(snapper);
        self
    }

    /// Setzt oder entfernt den Routing-Dienst.
    pub fn set_snapper(&mut self, snapper: Option<Box<dyn RouteSnapper>>) {
        self.snapper = snapper;
    }

    /// Aktuelle Route.
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Gibt `true` zurück, solange neue Punkte angenommen werden.
    pub fn is_drawing_open(&self) -> bool {
        self.drawing_open
    }

    /// Start-Marker (falls vorhanden).
    pub fn start_marker(&self) -> Option<PlacedMarker> {
        self.start
    }

    /// Ziel-Marker-Zustand.
    pub fn terminal(&self) -> TerminalMarker {
        self.terminal
    }

    /// Handle der Streckenlinie.
    pub fn line_id(&self) -> LineId {
        self.line
    }

    /// Verarbeitet einen Klick auf die Karte.
    ///
    /// Gibt `true` zurück, wenn ein Punkt angehängt wurde.
    pub fn handle_map_click(&mut self, renderer: &mut dyn MapRenderer, point: Waypoint) -> bool {
        if !self.drawing_open {
            log::debug!("Klick ignoriert: Strecke ist abgeschlossen");
            return false;
        }

        if self.route.is_empty() {
            let id = renderer.add_marker(point, MarkerStyle::Start);
            renderer.subscribe_marker_click(id, MarkerAction::CloseAsLoop);
            self.start = Some(PlacedMarker {
                id,
                position: point,
            });
        } else {
            if let TerminalMarker::Separate(previous) = self.terminal {
                discard_marker(renderer, previous.id);
            }
            let id = renderer.add_marker(point, MarkerStyle::Finish);
            renderer.subscribe_marker_click(id, MarkerAction::CloseOpen);
            self.terminal = TerminalMarker::Separate(PlacedMarker {
                id,
                position: point,
            });
        }

        self.route.push(point);
        log::info!("Punkt hinzugefügt: {}", point);

        self.publish(renderer);
        true
    }

    /// Führt die abonnierte Aktion eines Marker-Klicks aus.
    pub fn handle_marker_action(
        &mut self,
        renderer: &mut dyn MapRenderer,
        action: MarkerAction,
    ) -> bool {
        match action {
            MarkerAction::CloseAsLoop => self.close_as_loop(renderer),
            MarkerAction::CloseOpen => self.close_open(renderer),
        }
    }

    /// Schließt die Strecke als Runde (Klick auf den Start-Marker).
    ///
    /// Hängt eine Kopie des ersten Punkts an. Keine Operation bei weniger als
    /// zwei Punkten oder bereits abgeschlossener Strecke.
    pub fn close_as_loop(&mut self, renderer: &mut dyn MapRenderer) -> bool {
        if !self.can_close() {
            return false;
        }
        let Some(first) = self.route.first() else {
            return false;
        };

        if let TerminalMarker::Separate(finish) = self.terminal {
            discard_marker(renderer, finish.id);
        }
        self.terminal = TerminalMarker::Coincident;
        self.route.push(first);
        self.finish_drawing(renderer);
        log::info!("Strecke als Runde geschlossen ({} Punkte)", self.route.len());

        self.publish(renderer);
        true
    }

    /// Schließt die Strecke offen ab (Klick auf den Ziel-Marker).
    ///
    /// Die Punktfolge bleibt unverändert.
    pub fn close_open(&mut self, renderer: &mut dyn MapRenderer) -> bool {
        if !self.can_close() {
            return false;
        }
        self.finish_drawing(renderer);
        log::info!("Strecke offen abgeschlossen ({} Punkte)", self.route.len());
        true
    }

    /// Entfernt Linie und Marker und startet mit einer leeren, offenen Strecke.
    pub fn reset(&mut self, renderer: &mut dyn MapRenderer) {
        renderer.remove_line(self.line);
        if let Some(start) = self.start.take() {
            discard_marker(renderer, start.id);
        }
        if let TerminalMarker::Separate(finish) = std::mem::take(&mut self.terminal) {
            discard_marker(renderer, finish.id);
        }

        self.route.clear();
        self.drawing_open = true;
        self.line = renderer.create_line();
        log::debug!("Strecke zurückgesetzt");

        self.notify_snapper();
    }

    /// Serialisiert die Strecke als GeoJSON.
    ///
    /// Erfordert mindestens zwei Punkte; andernfalls
    /// [`ExportError::InsufficientRoute`].
    pub fn export_geojson(&self, precision: Option<u32>) -> Result<String, ExportError> {
        let (Some(first), Some(last)) = (self.route.first(), self.route.last()) else {
            return Err(ExportError::InsufficientRoute {
                points: self.route.len(),
            });
        };
        if !self.route.has_segment() {
            return Err(ExportError::InsufficientRoute {
                points: self.route.len(),
            });
        }

        let start = self.start.map_or(first, |marker| marker.position);
        let terminal = match self.terminal {
            TerminalMarker::Separate(marker) => Some(marker.position),
            TerminalMarker::Coincident => None,
            TerminalMarker::None => Some(last),
        };

        let text = geojson_io::write_path_geojson(
            &PathFeatures {
                start,
                terminal,
                line: self.route.points(),
            },
            precision,
        )?;
        log::info!("Strecke exportiert ({} Punkte)", self.route.len());
        Ok(text)
    }

    /// Ersetzt die Strecke durch den Inhalt eines GeoJSON-Dokuments.
    ///
    /// Bei Parse-Fehlern bleibt der Zustand unverändert. Nach erfolgreichem Import
    /// ist die Strecke abgeschlossen und der Viewport wird eingepasst.
    pub fn import_geojson(
        &mut self,
        renderer: &mut dyn MapRenderer,
        text: &str,
    ) -> Result<(), ImportError> {
        let imported = geojson_io::parse_path_geojson(text)?;

        self.reset(renderer);
        self.route = Route::from_points(imported.route_points());
        renderer.set_line_points(self.line, self.route.points());

        match imported.points.as_slice() {
            [] => self.place_markers_at_route_ends(renderer),
            [only] => {
                self.start = Some(place_marker(renderer, *only, MarkerStyle::Start));
                self.terminal = TerminalMarker::Coincident;
            }
            [first, inner @ .., last] => {
                if !inner.is_empty() {
                    log::warn!("{} Zwischenpunkte ohne Marker-Rolle ignoriert", inner.len());
                }
                self.start = Some(place_marker(renderer, *first, MarkerStyle::Start));
                self.terminal =
                    TerminalMarker::Separate(place_marker(renderer, *last, MarkerStyle::Finish));
            }
        }

        self.drawing_open = false;
        match imported.bounds() {
            Some(bounds) => renderer.fit_bounds(bounds),
            None => log::warn!("Import ohne verwertbare Geometrie"),
        }
        let marker_count = usize::from(self.start.is_some())
            + usize::from(matches!(self.terminal, TerminalMarker::Separate(_)));
        log::info!(
            "Strecke importiert: {} Punkte, {} Marker",
            self.route.len(),
            marker_count
        );

        self.notify_snapper();
        Ok(())
    }

    fn can_close(&self) -> bool {
        self.drawing_open && self.route.has_segment()
    }

    /// Marker für Dokumente ohne Punkt-Features aus den Routenenden ableiten.
    fn place_markers_at_route_ends(&mut self, renderer: &mut dyn MapRenderer) {
        let (Some(first), Some(last)) = (self.route.first(), self.route.last()) else {
            return;
        };
        self.start = Some(place_marker(renderer, first, MarkerStyle::Start));
        self.terminal = if self.route.has_segment() && !self.route.is_loop() {
            TerminalMarker::Separate(place_marker(renderer, last, MarkerStyle::Finish))
        } else {
            TerminalMarker::Coincident
        };
    }

    /// Beendet das Zeichnen; Marker bleiben sichtbar, sind aber nicht mehr klickbar.
    fn finish_drawing(&mut self, renderer: &mut dyn MapRenderer) {
        self.drawing_open = false;
        if let Some(start) = self.start {
            renderer.unsubscribe_marker_click(start.id);
        }
        if let TerminalMarker::Separate(finish) = self.terminal {
            renderer.unsubscribe_marker_click(finish.id);
        }
    }

    fn publish(&mut self, renderer: &mut dyn MapRenderer) {
        renderer.set_line_points(self.line, self.route.points());
        self.notify_snapper();
    }

    fn notify_snapper(&mut self) {
        if let Some(snapper) = self.snapper.as_mut() {
            snapper.request_snap(self.route.points());
        }
    }
}

fn place_marker(
    renderer: &mut dyn MapRenderer,
    position: Waypoint,
    style: MarkerStyle,
) -> PlacedMarker {
    PlacedMarker {
        id: renderer.add_marker(position, style),
        position,
    }
}

/// Klick-Abo lösen, bevor der Marker verworfen wird.
fn discard_marker(renderer: &mut dyn MapRenderer, id: MarkerId) {
    renderer.unsubscribe_marker_click(id);
    renderer.remove_marker(id);
}
