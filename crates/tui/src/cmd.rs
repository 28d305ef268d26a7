//! # Effect execution
//!
//! The boundary where state-driven [`Effect`]s turn into data-source calls.
//! Each call runs on its own tokio task:
//!
//! - menu load and commit return a `JoinHandle<ExecOutcome>` that the runtime
//!   polls, so their results come back to the UI as `Msg::ExecCompleted`
//! - reorder tracking is spawned without a join point; its result is logged
//!   at `debug` and otherwise ignored
//!
//! Shell effects (`OpenSidebar`, `CloseSidebar`, `Quit`) are applied by the
//! runtime before this layer sees the batch.

use std::sync::Arc;

use jobdeck_api::NavigationSource;
use jobdeck_types::{Effect, ExecOutcome, NavChange, NavItem};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::app::App;

/// Work started for one batch of effects.
#[derive(Debug, Default)]
pub struct CommandBatch {
    /// Calls whose outcome the UI waits for.
    pub pending: Vec<JoinHandle<ExecOutcome>>,
}

/// Starts the data-source calls requested by `effects`.
pub fn run_from_effects(app: &App, effects: Vec<Effect>) -> CommandBatch {
    let mut batch = CommandBatch::default();
    for effect in effects {
        let source = Arc::clone(&app.ctx.source);
        match effect {
            Effect::LoadNavigation => {
                info!(source = %source.describe(), "loading navigation");
                batch.pending.push(spawn_fetch(source));
            }
            Effect::CommitNavigation(items) => {
                info!(count = items.len(), "saving navigation");
                batch.pending.push(spawn_commit(source, items));
            }
            Effect::TrackNavChange(change) => spawn_track(source, change),
            Effect::OpenSidebar | Effect::CloseSidebar | Effect::Quit => {
                debug!(?effect, "shell effect reached command layer; ignoring");
            }
        }
    }
    batch
}

fn spawn_fetch(source: Arc<dyn NavigationSource>) -> JoinHandle<ExecOutcome> {
    tokio::spawn(async move {
        match source.fetch_navigation().await {
            Ok(payload) => ExecOutcome::NavigationLoaded(payload.items),
            Err(error) => ExecOutcome::NavigationLoadFailed(error.to_string()),
        }
    })
}

fn spawn_commit(source: Arc<dyn NavigationSource>, items: Vec<NavItem>) -> JoinHandle<ExecOutcome> {
    tokio::spawn(async move {
        match source.update_navigation(&items).await {
            Ok(ack) if ack.success => ExecOutcome::NavigationCommitted(items),
            Ok(_) => ExecOutcome::NavigationCommitFailed("the data source did not accept the update".to_string()),
            Err(error) => ExecOutcome::NavigationCommitFailed(error.to_string()),
        }
    })
}

fn spawn_track(source: Arc<dyn NavigationSource>, change: NavChange) {
    tokio::spawn(async move {
        match source.track_nav_change(&change).await {
            Ok(ack) if ack.success => debug!(id = %change.id, from = change.from, to = change.to, "navigation change tracked"),
            Ok(_) => debug!(id = %change.id, "navigation change not acknowledged"),
            Err(error) => debug!(id = %change.id, %error, "navigation change tracking failed"),
        }
    });
}
