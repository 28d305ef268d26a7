mod pagination_component;
mod state;

pub use pagination_component::PaginationComponent;
pub use state::{PageSlot, PagerTarget, PaginationState};
