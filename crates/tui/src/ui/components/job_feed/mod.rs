mod job_feed_component;
mod state;

pub use job_feed_component::JobFeedComponent;
pub use state::JobFeedState;
