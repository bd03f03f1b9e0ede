//! Geografische Bounding Box.

use super::Waypoint;

/// Achsenparallele Bounding Box in Grad (Süd/West/Nord/Ost).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    /// Minimale Breite
    pub south: f64,
    /// Minimale Länge
    pub west: f64,
    /// Maximale Breite
    pub north: f64,
    /// Maximale Länge
    pub east: f64,
}

impl GeoBounds {
    /// Bounding Box um einen einzelnen Punkt.
    pub fn from_point(point: Waypoint) -> Self {
        Self {
            south: point.lat,
            west: point.lng,
            north: point.lat,
            east: point.lng,
        }
    }

    /// Bounding Box über alle Punkte. `None` bei leerer Eingabe.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Waypoint>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Self::from_point(*first);
        for point in iter {
            bounds.extend(*point);
        }
        Some(bounds)
    }

    /// Erweitert die Box so, dass `point` enthalten ist.
    pub fn extend(&mut self, point: Waypoint) {
        self.south = self.south.min(point.lat);
        self.north = self.north.max(point.lat);
        self.west = self.west.min(point.lng);
        self.east = self.east.max(point.lng);
    }

    /// Südwest-Ecke
    pub fn south_west(&self) -> Waypoint {
        Waypoint::new(self.south, self.west)
    }

    /// Nordost-Ecke
    pub fn north_east(&self) -> Waypoint {
        Waypoint::new(self.north, self.east)
    }

    /// Gibt `true` zurück, wenn die Box keine Ausdehnung hat (ein einzelner Punkt).
    pub fn is_point(&self) -> bool {
        self.south == self.north && self.west == self.east
    }
}
