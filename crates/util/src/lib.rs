pub mod paging;
pub mod path_processing;
pub mod settings;

pub use paging::{PageWindow, total_pages};
pub use path_processing::{app_file_path, expand_tilde};
pub use settings::{Settings, SettingsError};
