//! UI layer: components, layout, theme and the runtime loop.

pub mod components;
mod layout;
pub mod main_component;
pub mod runtime;
pub mod theme;
pub mod utils;
