//! Geografischer Wegpunkt (Breite/Länge in Grad).

/// Ein Punkt der Strecke in WGS84-Grad.
///
/// Die Identität eines Wegpunkts ergibt sich nur aus seiner Position in der Route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint {
    /// Breitengrad in Grad
    pub lat: f64,
    /// Längengrad in Grad
    pub lng: f64,
}

impl Waypoint {
    /// Erstellt einen Wegpunkt aus Breite und Länge.
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// GeoJSON-Position `[lng, lat]`.
    pub fn to_position(self) -> Vec<f64> {
        vec![self.lng, self.lat]
    }

    /// Liest eine GeoJSON-Position `[lng, lat, (alt)]`.
    ///
    /// Gibt `None` zurück, wenn weniger als zwei endliche Werte vorhanden sind.
    pub fn from_position(position: &[f64]) -> Option<Self> {
        match position {
            [lng, lat, ..] if lng.is_finite() && lat.is_finite() => Some(Self::new(*lat, *lng)),
            _ => None,
        }
    }

    /// Rundet beide Koordinaten auf `decimals` Nachkommastellen.
    pub fn rounded(self, decimals: u32) -> Self {
        let factor = 10f64.powi(decimals as i32);
        Self::new(
            (self.lat * factor).round() / factor,
            (self.lng * factor).round() / factor,
        )
    }
}

impl std::fmt::Display for Waypoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_position_order_is_lng_lat() {
        let wp = Waypoint::new(46.9, 2.35);
        assert_eq!(wp.to_position(), vec![2.35, 46.9]);
    }

    #[test]
    fn test_from_position_ignores_altitude() {
        let wp = Waypoint::from_position(&[2.0, 48.0, 120.0]).expect("Position gültig");
        assert_relative_eq!(wp.lat, 48.0);
        assert_relative_eq!(wp.lng, 2.0);
    }

    #[test]
    fn test_from_position_rejects_short_or_nan() {
        assert!(Waypoint::from_position(&[2.0]).is_none());
        assert!(Waypoint::from_position(&[f64::NAN, 1.0]).is_none());
    }

    #[test]
    fn test_rounded_to_six_decimals() {
        let wp = Waypoint::new(46.922928100038, 2.351074218750).rounded(6);
        assert_relative_eq!(wp.lat, 46.922928);
        assert_relative_eq!(wp.lng, 2.351074);
    }
}
