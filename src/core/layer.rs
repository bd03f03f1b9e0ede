//! Handles und Stile für Karten-Layer (Marker, Linien).

/// Handle eines Markers im Renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerId(pub u64);

/// Handle einer Linie im Renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(pub u64);

/// Darstellungsstil eines Markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkerStyle {
    /// Startpunkt der Strecke
    #[default]
    Start,
    /// Zielpunkt (zuletzt gesetzter Punkt)
    Finish,
}

impl MarkerStyle {
    /// Kurzes Label für die Darstellung im Marker.
    pub fn label(self) -> &'static str {
        match self {
            MarkerStyle::Start => "S",
            MarkerStyle::Finish => "Z",
        }
    }
}

/// Aktion, die ein abonnierter Marker-Klick auslöst.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerAction {
    /// Klick auf den Start-Marker: Strecke als Runde schließen
    CloseAsLoop,
    /// Klick auf den Ziel-Marker: Strecke offen abschließen
    CloseOpen,
}
