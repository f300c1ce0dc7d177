//! Edge-triggered head change detection.

use bosun_core::Revision;

/// Detects head changes between consecutive observations.
///
/// A revision is reported exactly once, at the moment it first becomes
/// current. The first observation primes the baseline without
/// reporting: the head that exists at startup is not new work.
#[derive(Debug, Default)]
pub struct HeadDetector {
    last_seen: Option<Revision>,
}

impl HeadDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Observe the current head; return it when it differs from the
    /// previous observation.
    pub fn observe(&mut self, head: Revision) -> Option<Revision> {
        match &self.last_seen {
            None => {
                self.last_seen = Some(head);
                None
            }
            Some(prev) if *prev == head => None,
            Some(_) => {
                self.last_seen = Some(head.clone());
                Some(head)
            }
        }
    }

    /// The most recently observed head, if any.
    pub fn last_seen(&self) -> Option<&Revision> {
        self.last_seen.as_ref()
    }
}
