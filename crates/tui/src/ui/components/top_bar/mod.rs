mod state;
mod top_bar_component;

pub use state::TopBarState;
pub use top_bar_component::TopBarComponent;
