//! Anbindung eines optionalen Routing-Dienstes (Snapping auf Straßen).

use crate::core::Waypoint;
use std::cell::RefCell;
use std::rc::Rc;

/// Dienst, der zu einer Wegpunktfolge eine straßengenaue Linie berechnet.
///
/// Aufrufe sind fire-and-forget: der Editor wartet nicht auf Ergebnisse.
pub trait RouteSnapper {
    /// Übergibt die vollständige Wegpunktfolge zur Neuberechnung.
    fn request_snap(&mut self, waypoints: &[Waypoint]);
}

/// Snapper, der nur die jeweils letzte Anfrage für den Host bereithält.
///
/// Klone teilen sich denselben Puffer; der Host entnimmt Anfragen per
/// [`QueuedSnapper::take_latest`].
#[derive(Debug, Clone, Default)]
pub struct QueuedSnapper {
    latest: Rc<RefCell<Option<Vec<Waypoint>>>>,
}

impl QueuedSnapper {
    /// Erstellt einen leeren Puffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Entnimmt die letzte unbearbeitete Anfrage.
    pub fn take_latest(&self) -> Option<Vec<Waypoint>> {
        self.latest.borrow_mut().take()
    }
}

impl RouteSnapper for QueuedSnapper {
    fn request_snap(&mut self, waypoints: &[Waypoint]) {
        *self.latest.borrow_mut() = Some(waypoints.to_vec());
    }
}
