use crate::error::LaunchError;
use log::info;

pub trait BrowserLauncher {
    fn open_url(&self, url: &str) -> Result<(), LaunchError>;
}

/// Opens URLs in the user's default browser.
pub struct SystemLauncher;

impl BrowserLauncher for SystemLauncher {
    fn open_url(&self, url: &str) -> Result<(), LaunchError> {
        info!("opening {}", url);
        open::that(url).map_err(|err| LaunchError {
            url: url.to_string(),
            message: err.to_string(),
        })
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::cell::RefCell;

    /// Records URLs instead of opening them; fails when `fail` is set.
    #[derive(Default)]
    pub struct RecordingLauncher {
        pub opened: RefCell<Vec<String>>,
        pub fail: bool,
    }

    impl BrowserLauncher for RecordingLauncher {
        fn open_url(&self, url: &str) -> Result<(), LaunchError> {
            if self.fail {
                return Err(LaunchError {
                    url: url.to_string(),
                    message: "no browser available".to_string(),
                });
            }
            self.opened.borrow_mut().push(url.to_string());
            Ok(())
        }
    }
}
