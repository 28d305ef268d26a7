//! # jobdeck TUI
//!
//! Terminal dashboard for the jobdeck job board: a top bar, an editable
//! sidebar menu backed by a [`NavigationSource`], and a paginated job feed.
//!
//! ## Architecture
//!
//! Elm-like: components handle input against state held on `App` and return
//! `Effect`s; the runtime turns effects into data-source tasks whose
//! `ExecOutcome`s come back as messages.

mod app;
mod cmd;
mod ui;

use std::sync::Arc;

use anyhow::Result;
use jobdeck_api::NavigationSource;
use jobdeck_util::Settings;

/// Runs the dashboard until the user quits.
///
/// # Errors
///
/// Terminal setup or teardown failures, or a failed frame draw.
pub async fn run(settings: Settings, source: Arc<dyn NavigationSource>) -> Result<()> {
    ui::runtime::run_app(settings, source).await
}
