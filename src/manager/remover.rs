use crate::error::DeletionError;
use crate::history::HistoryLogger;
use crate::manager::FolderEntry;
use crate::safety::{SafetyChecker, SafetyVerdict};
use log::warn;
use std::fs;
use std::path::Path;

/// Performs the recursive delete of one listed folder.
pub trait FolderRemover {
    fn remove(&self, root: &Path, entry: &FolderEntry) -> Result<(), DeletionError>;
}

pub struct DefaultRemover {
    safety_checker: SafetyChecker,
    history_logger: Option<HistoryLogger>,
}

impl DefaultRemover {
    pub fn new() -> Self {
        Self {
            safety_checker: SafetyChecker::new(),
            history_logger: None,
        }
    }

    pub fn with_history(mut self, logger: HistoryLogger) -> Self {
        self.history_logger = Some(logger);
        self
    }

    fn record(&self, entry: &FolderEntry, result: &Result<(), DeletionError>) {
        let Some(logger) = &self.history_logger else {
            return;
        };
        let logged = match result {
            Ok(()) => logger.log_delete(&entry.full_path),
            Err(e) => logger.log_failure(&entry.full_path, &e.to_string()),
        };
        if let Err(e) = logged {
            warn!("could not write history to {}: {}", logger.path().display(), e);
        }
    }
}

impl FolderRemover for DefaultRemover {
    fn remove(&self, root: &Path, entry: &FolderEntry) -> Result<(), DeletionError> {
        let result = match self.safety_checker.check(root, &entry.full_path) {
            SafetyVerdict::Refused(reason) => Err(DeletionError::Refused(reason)),
            SafetyVerdict::Allowed => fs::remove_dir_all(&entry.full_path).map_err(DeletionError::from),
        };
        self.record(entry, &result);
        result
    }
}

impl Default for DefaultRemover {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HistoryAction;

    fn entry(root: &Path, name: &str) -> FolderEntry {
        FolderEntry {
            name: name.to_string(),
            full_path: root.join(name),
            selected: true,
        }
    }

    #[test]
    fn test_removes_tree_and_logs() {
        let root = tempfile::tempdir().expect("root");
        let logs = tempfile::tempdir().expect("logs");
        fs::create_dir_all(root.path().join("Game").join("data")).expect("mkdir");
        fs::write(root.path().join("Game").join("data").join("a.bin"), b"x").expect("write");

        let remover = DefaultRemover::new().with_history(HistoryLogger::at(logs.path().join("h.log")));
        remover
            .remove(root.path(), &entry(root.path(), "Game"))
            .expect("remove");

        assert!(!root.path().join("Game").exists());
        let history = HistoryLogger::at(logs.path().join("h.log"))
            .read_history(None)
            .expect("history");
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].action, HistoryAction::Deleted);
    }

    #[test]
    fn test_vanished_folder_is_io_error() {
        let root = tempfile::tempdir().expect("root");
        let remover = DefaultRemover::new();
        let err = remover
            .remove(root.path(), &entry(root.path(), "gone"))
            .expect_err("missing folder");
        assert!(matches!(err, DeletionError::Io(_)));
    }

    #[test]
    fn test_outside_root_is_refused() {
        let root = tempfile::tempdir().expect("root");
        let other = tempfile::tempdir().expect("other");
        fs::create_dir(other.path().join("keep")).expect("mkdir");

        let stray = FolderEntry {
            name: "keep".to_string(),
            full_path: other.path().join("keep"),
            selected: true,
        };
        let err = DefaultRemover::new()
            .remove(root.path(), &stray)
            .expect_err("refused");
        assert!(matches!(err, DeletionError::Refused(_)));
        assert!(other.path().join("keep").exists());
    }
}
