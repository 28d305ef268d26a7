mod sidebar_component;
mod state;

pub use sidebar_component::SidebarComponent;
pub use state::{DOUBLE_CLICK_WINDOW, DragState, HeaderAction, LabelEdit, NavEditorState};
