//! Navigation data sources for the jobdeck dashboard.
//!
//! The sidebar editor talks to a [`NavigationSource`], an asynchronous
//! contract with three calls:
//!
//! - `fetch_navigation` returns the ordered menu
//! - `update_navigation` stores the full ordered menu
//! - `track_nav_change` records a single reorder transition
//!
//! Two implementations ship with the crate. [`MockNavigationSource`] resolves
//! canned data after a fixed delay and is the default. [`HttpNavigationSource`]
//! maps the same calls onto a JSON backend.
//!
//! The job feed has no data-source contract; its postings come from the
//! compiled-in [`catalog`].
//!
//! # Example
//!
//! ```ignore
//! use jobdeck_api::{MockNavigationSource, NavigationSource};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), jobdeck_api::SourceError> {
//!     let source = MockNavigationSource::default();
//!     let payload = source.fetch_navigation().await?;
//!     println!("{} menu items", payload.items.len());
//!     Ok(())
//! }
//! ```

pub mod catalog;
mod http;
mod mock;

use jobdeck_types::{Ack, NavChange, NavItem, NavigationPayload};
use thiserror::Error;

pub use http::HttpNavigationSource;
pub use mock::{FailurePlan, MockNavigationSource};

/// Errors surfaced by a navigation data source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The backend could not be reached or returned a transport error.
    #[error("navigation request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The backend answered with a non-success HTTP status.
    #[error("navigation backend returned {status} for {operation}")]
    Status { operation: &'static str, status: u16 },
    /// The configured base URL is unusable.
    #[error("invalid navigation API base '{base}': {reason}")]
    InvalidBase { base: String, reason: String },
    /// The source refused the call (used by the mock's injected failures).
    #[error("{operation} rejected: {message}")]
    Rejected { operation: &'static str, message: String },
}

/// Asynchronous navigation backend used by the sidebar editor.
///
/// Implementations must be cheap to share behind an `Arc`; the TUI spawns
/// each call on its own task.
#[async_trait::async_trait]
pub trait NavigationSource: Send + Sync {
    /// Load the ordered menu.
    async fn fetch_navigation(&self) -> Result<NavigationPayload, SourceError>;

    /// Store the full ordered menu.
    async fn update_navigation(&self, items: &[NavItem]) -> Result<Ack, SourceError>;

    /// Record a single reorder transition.
    async fn track_nav_change(&self, change: &NavChange) -> Result<Ack, SourceError>;

    /// Short name used in logs.
    fn describe(&self) -> String;
}
