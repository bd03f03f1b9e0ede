//! Zeitgesteuerte Hinweise im Kartenbereich.
//!
//! Ein Hinweis ist sichtbar, bis seine Frist abläuft oder er explizit
//! ausgeblendet wird. Ausblenden ist idempotent.

use std::time::{Duration, Instant};

/// Art des angezeigten Hinweises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Nach dem zweiten Punkt: wie die Strecke fortgesetzt oder beendet wird
    PathHint,
    /// Export mit weniger als zwei Punkten versucht
    ExportBlocked,
}

impl NoticeKind {
    /// Anzeigetext.
    pub fn message(self) -> &'static str {
        match self {
            NoticeKind::PathHint => {
                "Keep clicking to extend the path. Click the start marker to close a loop, \
                 or the last marker to finish."
            }
            NoticeKind::ExportBlocked => "Draw at least two points before exporting.",
        }
    }

    /// Fehlerhinweise werden farblich hervorgehoben.
    pub fn is_error(self) -> bool {
        matches!(self, NoticeKind::ExportBlocked)
    }
}

#[derive(Debug, Clone, Copy)]
struct ActiveNotice {
    kind: NoticeKind,
    hide_at: Instant,
}

/// Sichtbarkeits-Flag mit Ablauffrist.
#[derive(Debug, Clone, Default)]
pub struct TransientNotice {
    active: Option<ActiveNotice>,
}

impl TransientNotice {
    /// Erstellt einen ausgeblendeten Hinweis.
    pub fn new() -> Self {
        Self { active: None }
    }

    /// Zeigt `kind` bis `now + duration`; ersetzt einen bereits sichtbaren Hinweis.
    pub fn show(&mut self, kind: NoticeKind, now: Instant, duration: Duration) {
        self.active = Some(ActiveNotice {
            kind,
            hide_at: now + duration,
        });
    }

    /// Blendet den Hinweis sofort aus.
    pub fn hide(&mut self) {
        self.active = None;
    }

    /// Blendet nur aus, wenn gerade `kind` angezeigt wird.
    pub fn hide_kind(&mut self, kind: NoticeKind) {
        if self.active.is_some_and(|active| active.kind == kind) {
            self.active = None;
        }
    }

    /// Entfernt einen abgelaufenen Hinweis. Gibt `true` zurück, wenn etwas entfernt wurde.
    pub fn expire(&mut self, now: Instant) -> bool {
        match self.active {
            Some(active) if active.hide_at <= now => {
                self.active = None;
                true
            }
            _ => false,
        }
    }

    /// Zum Zeitpunkt `now` sichtbarer Hinweis.
    pub fn current(&self, now: Instant) -> Option<NoticeKind> {
        self.active
            .filter(|active| active.hide_at > now)
            .map(|active| active.kind)
    }

    /// Restlaufzeit des sichtbaren Hinweises (für Repaint-Planung).
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.active
            .filter(|active| active.hide_at > now)
            .map(|active| active.hide_at - now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DURATION: Duration = Duration::from_millis(3000);

    #[test]
    fn test_notice_visible_until_deadline() {
        let now = Instant::now();
        let mut notice = TransientNotice::new();
        notice.show(NoticeKind::ExportBlocked, now, DURATION);

        assert_eq!(notice.current(now), Some(NoticeKind::ExportBlocked));
        assert_eq!(
            notice.current(now + Duration::from_millis(2999)),
            Some(NoticeKind::ExportBlocked)
        );
        assert_eq!(notice.current(now + DURATION), None);
    }

    #[test]
    fn test_expire_removes_only_after_deadline() {
        let now = Instant::now();
        let mut notice = TransientNotice::new();
        notice.show(NoticeKind::PathHint, now, DURATION);

        assert!(!notice.expire(now + Duration::from_millis(10)));
        assert!(notice.expire(now + DURATION));
        assert!(!notice.expire(now + DURATION));
    }

    #[test]
    fn test_hide_is_idempotent() {
        let now = Instant::now();
        let mut notice = TransientNotice::new();
        notice.hide();
        notice.show(NoticeKind::PathHint, now, DURATION);
        notice.hide();
        notice.hide();

        assert_eq!(notice.current(now), None);
        assert!(!notice.expire(now + DURATION));
    }

    #[test]
    fn test_hide_kind_keeps_other_notice() {
        let now = Instant::now();
        let mut notice = TransientNotice::new();
        notice.show(NoticeKind::ExportBlocked, now, DURATION);

        notice.hide_kind(NoticeKind::PathHint);
        assert_eq!(notice.current(now), Some(NoticeKind::ExportBlocked));

        notice.hide_kind(NoticeKind::ExportBlocked);
        assert_eq!(notice.current(now), None);
    }

    #[test]
    fn test_show_restarts_deadline() {
        let now = Instant::now();
        let later = now + Duration::from_millis(2000);
        let mut notice = TransientNotice::new();
        notice.show(NoticeKind::ExportBlocked, now, DURATION);
        notice.show(NoticeKind::ExportBlocked, later, DURATION);

        assert_eq!(notice.remaining(later), Some(DURATION));
        assert!(!notice.expire(now + DURATION));
    }
}
