//! UI components: top bar, sidebar editor, job feed, pager, status line.

pub mod common;
pub mod component;
pub mod hint_bar;
pub mod job_feed;
pub mod pagination;
pub mod sidebar;
pub mod top_bar;

pub use component::*;
pub use hint_bar::HintBarComponent;
pub use job_feed::JobFeedComponent;
pub use sidebar::SidebarComponent;
pub use top_bar::TopBarComponent;
