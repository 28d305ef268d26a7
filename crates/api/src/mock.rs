//! In-process navigation source that resolves canned data after a delay.

use std::sync::Mutex;
use std::time::Duration;

use jobdeck_types::{Ack, NavChange, NavItem, NavigationPayload};
use tokio::time::sleep;
use tracing::debug;

use crate::{NavigationSource, SourceError, catalog};

/// Default latency of every mock call.
pub const DEFAULT_MOCK_DELAY: Duration = Duration::from_millis(500);

/// Which calls the mock should reject. All `false` by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FailurePlan {
    pub fetch: bool,
    pub update: bool,
    pub track: bool,
}

/// Mock backend. It always serves the same menu: updates are recorded but
/// do not change what `fetch_navigation` returns.
#[derive(Debug)]
pub struct MockNavigationSource {
    items: Vec<NavItem>,
    delay: Duration,
    failures: FailurePlan,
    updates: Mutex<Vec<Vec<NavItem>>>,
    changes: Mutex<Vec<NavChange>>,
}

impl Default for MockNavigationSource {
    fn default() -> Self {
        Self::new(catalog::default_navigation(), DEFAULT_MOCK_DELAY)
    }
}

impl MockNavigationSource {
    pub fn new(items: Vec<NavItem>, delay: Duration) -> Self {
        Self {
            items,
            delay,
            failures: FailurePlan::default(),
            updates: Mutex::new(Vec::new()),
            changes: Mutex::new(Vec::new()),
        }
    }

    /// Same canned menu with a custom delay.
    pub fn with_delay(delay: Duration) -> Self {
        Self::new(catalog::default_navigation(), delay)
    }

    pub fn with_failures(mut self, failures: FailurePlan) -> Self {
        self.failures = failures;
        self
    }

    /// Every item list received by `update_navigation`, oldest first.
    pub fn recorded_updates(&self) -> Vec<Vec<NavItem>> {
        self.updates.lock().expect("mock lock poisoned").clone()
    }

    /// Every change received by `track_nav_change`, oldest first.
    pub fn recorded_changes(&self) -> Vec<NavChange> {
        self.changes.lock().expect("mock lock poisoned").clone()
    }

    async fn settle(&self) {
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
    }
}

#[async_trait::async_trait]
impl NavigationSource for MockNavigationSource {
    async fn fetch_navigation(&self) -> Result<NavigationPayload, SourceError> {
        self.settle().await;
        if self.failures.fetch {
            return Err(SourceError::Rejected {
                operation: "fetchNavigation",
                message: "mock failure".into(),
            });
        }
        debug!(count = self.items.len(), "mock navigation fetched");
        Ok(NavigationPayload {
            items: self.items.clone(),
        })
    }

    async fn update_navigation(&self, items: &[NavItem]) -> Result<Ack, SourceError> {
        self.settle().await;
        if self.failures.update {
            return Err(SourceError::Rejected {
                operation: "updateNavigation",
                message: "mock failure".into(),
            });
        }
        self.updates.lock().expect("mock lock poisoned").push(items.to_vec());
        Ok(Ack::OK)
    }

    async fn track_nav_change(&self, change: &NavChange) -> Result<Ack, SourceError> {
        self.settle().await;
        if self.failures.track {
            return Err(SourceError::Rejected {
                operation: "trackNavChange",
                message: "mock failure".into(),
            });
        }
        self.changes.lock().expect("mock lock poisoned").push(change.clone());
        Ok(Ack::OK)
    }

    fn describe(&self) -> String {
        format!("mock ({} ms)", self.delay.as_millis())
    }
}
