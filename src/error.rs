use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ManagerError {
    #[error("Root folder does not exist: {}", .path.display())]
    RootMissing { path: PathBuf },
    #[error("Could not read directory {}: {source}", .path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Why a single folder could not be removed. Recorded per entry, never fatal.
#[derive(Debug, thiserror::Error)]
pub enum DeletionError {
    #[error("Refused: {0}")]
    Refused(String),
    #[error("{0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, thiserror::Error)]
#[error("Could not open browser for {url}: {message}")]
pub struct LaunchError {
    pub url: String,
    pub message: String,
}
