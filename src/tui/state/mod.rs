pub mod app_state;
pub mod modes;
pub mod results;

pub use app_state::App;
pub use modes::AppMode;
pub use results::{DeletionSummary, Notice, NoticeLevel};
