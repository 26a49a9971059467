//! SPA navigation watcher
//!
//! Models the mutation-observer subscription that re-triggers
//! reconciliation on client-side navigation: structural mutations are
//! compared against the last-seen URL, and a URL change schedules a re-run
//! after a short settling delay. The subscription has no teardown; it dies
//! with the document.

use std::time::Duration;

/// Default settling delay before re-running reconcile after a URL change.
pub const SETTLE_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone)]
pub struct NavigationWatcher {
    last_url: String,
    settle_delay: Duration,
}

impl NavigationWatcher {
    pub fn new(initial_url: impl Into<String>) -> Self {
        Self::with_delay(initial_url, SETTLE_DELAY)
    }

    pub fn with_delay(initial_url: impl Into<String>, settle_delay: Duration) -> Self {
        Self {
            last_url: initial_url.into(),
            settle_delay,
        }
    }

    /// Feed one observed mutation. Returns the settling delay after which a
    /// reconcile pass should run when the URL changed since the last
    /// sighting, `None` otherwise.
    pub fn on_mutation(&mut self, current_url: &str) -> Option<Duration> {
        if current_url == self.last_url {
            return None;
        }
        self.last_url = current_url.to_string();
        Some(self.settle_delay)
    }

    pub fn last_url(&self) -> &str {
        &self.last_url
    }
}
