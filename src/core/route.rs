//! Geordnete Wegpunkt-Folge der gezeichneten Strecke.

use super::Waypoint;

/// Geordnete Folge von Wegpunkten.
///
/// Doppelte aufeinanderfolgende Punkte sind erlaubt; eine geschlossene Runde
/// endet mit einer Kopie des ersten Punkts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Route {
    points: Vec<Waypoint>,
}

impl Route {
    /// Erstellt eine leere Route.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Übernimmt eine vorhandene Punktfolge.
    pub fn from_points(points: Vec<Waypoint>) -> Self {
        Self { points }
    }

    /// Hängt einen Punkt an das Ende an.
    pub fn push(&mut self, point: Waypoint) {
        self.points.push(point);
    }

    /// Entfernt alle Punkte.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Anzahl der Punkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn die Route keine Punkte enthält.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Mindestens ein Segment vorhanden (zwei Punkte).
    pub fn has_segment(&self) -> bool {
        self.points.len() > 1
    }

    /// Erster Punkt
    pub fn first(&self) -> Option<Waypoint> {
        self.points.first().copied()
    }

    /// Letzter Punkt
    pub fn last(&self) -> Option<Waypoint> {
        self.points.last().copied()
    }

    /// Read-only Sicht auf alle Punkte.
    pub fn points(&self) -> &[Waypoint] {
        &self.points
    }

    /// Gibt `true` zurück, wenn die Route als Runde geschlossen ist.
    pub fn is_loop(&self) -> bool {
        self.has_segment() && self.first() == self.last()
    }
}
