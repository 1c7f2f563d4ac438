pub mod navigation;
pub mod selection;

pub use navigation::{clamp_selection, navigate_down, navigate_up};
pub use selection::{focused_entry, toggle_focused};
