// src/notice.rs
//
// Transient toasts. A notice is visible for a fixed TTL after it was raised
// and then disappears on its own; there is no dismiss.

use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

#[derive(Clone, Debug)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    pub shown_at: Instant,
}

impl Notice {
    pub fn is_visible_at(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.shown_at) < ttl
    }
}

#[derive(Clone, Debug)]
pub struct Notices {
    ttl: Duration,
    items: Vec<Notice>,
}

impl Notices {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, items: Vec::new() }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn success_at(&mut self, text: impl Into<String>, now: Instant) {
        self.push(NoticeKind::Success, text.into(), now);
    }

    pub fn failure_at(&mut self, text: impl Into<String>, now: Instant) {
        self.push(NoticeKind::Failure, text.into(), now);
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.success_at(text, Instant::now());
    }

    pub fn failure(&mut self, text: impl Into<String>) {
        self.failure_at(text, Instant::now());
    }

    fn push(&mut self, kind: NoticeKind, text: String, now: Instant) {
        match kind {
            NoticeKind::Success => logf!("UI: notice ✓ {}", text),
            NoticeKind::Failure => logf!("UI: notice ✗ {}", text),
        }
        self.items.push(Notice { kind, text, shown_at: now });
    }

    /// Notices still on screen at `now`, oldest first.
    pub fn visible_at(&self, now: Instant) -> impl Iterator<Item = &Notice> + '_ {
        let ttl = self.ttl;
        self.items.iter().filter(move |n| n.is_visible_at(now, ttl))
    }

    /// Forget expired notices.
    pub fn prune(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.items.retain(|n| n.is_visible_at(now, ttl));
    }

    /// Time until the next notice hides, for scheduling a repaint.
    pub fn next_expiry(&self, now: Instant) -> Option<Duration> {
        self.visible_at(now)
            .map(|n| (n.shown_at + self.ttl).saturating_duration_since(now))
            .min()
    }

    /// Everything raised so far that hasn't been pruned.
    pub fn all(&self) -> &[Notice] {
        &self.items
    }

    pub fn count(&self, kind: NoticeKind) -> usize {
        self.items.iter().filter(|n| n.kind == kind).count()
    }
}
