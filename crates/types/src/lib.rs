//! Shared vocabulary for the jobdeck crates: the navigation and job models,
//! plus the message/effect types exchanged between the TUI and its runtime.

mod job;
mod nav;

pub use job::{EmploymentType, JobPosting, ParseSortKeyError, SortKey, WorkMode};
pub use nav::{Ack, NavChange, NavIcon, NavItem, NavigationPayload};

/// Result of an asynchronous data-source call, delivered back to the UI loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecOutcome {
    /// `fetchNavigation` resolved with the menu items.
    NavigationLoaded(Vec<NavItem>),
    /// `fetchNavigation` failed; the menu stays empty.
    NavigationLoadFailed(String),
    /// `updateNavigation` acknowledged the items sent with the commit.
    NavigationCommitted(Vec<NavItem>),
    /// `updateNavigation` failed or returned `success: false`.
    NavigationCommitFailed(String),
}

/// Messages that can be sent to update the application state.
///
/// This enum defines the system events that can trigger state changes in
/// the application. Key and mouse input is routed to components directly.
#[derive(Debug, Clone)]
pub enum Msg {
    /// Periodic UI tick (notice expiry)
    Tick,
    /// Terminal resized
    Resize(u16, u16),
    /// Background data-source call completed with outcome
    ExecCompleted(ExecOutcome),
}

/// Side effects that can be triggered by state changes.
///
/// Components return effects instead of performing I/O; the runtime turns
/// them into data-source calls or shell-level state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch the menu from the data source (once per mount)
    LoadNavigation,
    /// Send the full working copy to the data source
    CommitNavigation(Vec<NavItem>),
    /// Report a reorder; fire-and-forget
    TrackNavChange(NavChange),
    /// Open the sidebar overlay (menu button)
    OpenSidebar,
    /// Close the sidebar overlay
    CloseSidebar,
    /// Leave the application
    Quit,
}
