pub mod browse;
pub mod common;
pub mod root_input;

pub use browse::handle_browse_key;
pub use common::{handle_confirm_key, handle_help_key, handle_notice_key, handle_result_key};
pub use root_input::handle_root_input_key;
