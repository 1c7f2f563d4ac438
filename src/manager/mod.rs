pub mod remover;

pub use remover::{DefaultRemover, FolderRemover};

use crate::error::ManagerError;
use log::{debug, info, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderEntry {
    pub name: String,
    pub full_path: PathBuf,
    pub selected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingOutcome {
    Listed(usize),
    NotADirectory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedDeletion {
    pub name: String,
    pub error: String,
}

#[derive(Debug, Default)]
pub struct DeletionReport {
    pub succeeded: Vec<String>,
    pub failed: Vec<FailedDeletion>,
    /// Set when the listing could not be rebuilt after the pass.
    pub refresh_error: Option<ManagerError>,
}

impl DeletionReport {
    pub fn attempted(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    pub fn is_clean(&self) -> bool {
        self.failed.is_empty() && self.refresh_error.is_none()
    }
}

/// Lists the subfolders of one root directory and tracks which are selected.
pub struct FolderManager {
    root: Option<PathBuf>,
    entries: Vec<FolderEntry>,
    remover: Box<dyn FolderRemover>,
}

impl FolderManager {
    pub fn new() -> Self {
        Self::with_remover(Box::new(DefaultRemover::new()))
    }

    pub fn with_remover(remover: Box<dyn FolderRemover>) -> Self {
        Self {
            root: None,
            entries: Vec::new(),
            remover,
        }
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    pub fn entries(&self) -> &[FolderEntry] {
        &self.entries
    }

    /// Lists the subfolders of `path`, made absolute against the working
    /// directory so every `full_path` is absolute too.
    pub fn select_root(&mut self, path: impl AsRef<Path>) -> Result<ListingOutcome, ManagerError> {
        self.entries.clear();
        let path = match std::path::absolute(path.as_ref()) {
            Ok(path) => path,
            Err(source) => {
                let path = path.as_ref().to_path_buf();
                self.root = Some(path.clone());
                return Err(ManagerError::DirectoryRead { path, source });
            }
        };
        self.root = Some(path.clone());

        let meta = match fs::metadata(&path) {
            Ok(meta) => meta,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!("root {} does not exist", path.display());
                return Err(ManagerError::RootMissing { path });
            }
            Err(source) => return Err(ManagerError::DirectoryRead { path, source }),
        };

        if !meta.is_dir() {
            info!("{} is not a directory, nothing to list", path.display());
            return Ok(ListingOutcome::NotADirectory);
        }

        let entries = read_subfolders(&path)
            .map_err(|source| ManagerError::DirectoryRead {
                path: path.clone(),
                source,
            })?;

        info!("listed {} folders under {}", entries.len(), path.display());
        self.entries = entries;
        Ok(ListingOutcome::Listed(self.entries.len()))
    }

    pub fn refresh(&mut self) -> Result<ListingOutcome, ManagerError> {
        match self.root.clone() {
            Some(root) => self.select_root(root),
            None => Ok(ListingOutcome::NotADirectory),
        }
    }

    pub fn toggle(&mut self, name: &str) {
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => entry.selected = !entry.selected,
            None => debug!("toggle ignored for unknown folder {:?}", name),
        }
    }

    pub fn set_all_selected(&mut self) {
        for entry in &mut self.entries {
            entry.selected = true;
        }
    }

    pub fn clear_selection(&mut self) {
        for entry in &mut self.entries {
            entry.selected = false;
        }
    }

    pub fn selected_entries(&self) -> Vec<&FolderEntry> {
        self.entries.iter().filter(|e| e.selected).collect()
    }

    pub fn selected_names(&self) -> Vec<String> {
        self.selected_entries()
            .into_iter()
            .map(|e| e.name.clone())
            .collect()
    }

    /// Deletes every selected folder in listing order, then re-lists the root.
    ///
    /// A failing folder never stops the pass; its error lands in the report.
    pub fn delete_selected(&mut self) -> DeletionReport {
        let mut report = DeletionReport::default();
        let targets: Vec<FolderEntry> = self.selected_entries().into_iter().cloned().collect();

        let Some(root) = self.root.clone() else {
            return report;
        };

        for entry in &targets {
            debug!("deleting {}", entry.full_path.display());
            match self.remover.remove(&root, entry) {
                Ok(()) => {
                    info!("deleted {}", entry.full_path.display());
                    report.succeeded.push(entry.name.clone());
                }
                Err(e) => {
                    warn!("failed to delete {}: {}", entry.full_path.display(), e);
                    report.failed.push(FailedDeletion {
                        name: entry.name.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }

        if let Err(e) = self.select_root(&root) {
            report.refresh_error = Some(e);
        }

        report
    }
}

impl Default for FolderManager {
    fn default() -> Self {
        Self::new()
    }
}

fn read_subfolders(path: &Path) -> io::Result<Vec<FolderEntry>> {
    let mut entries = Vec::new();

    for dir_entry in fs::read_dir(path)? {
        let dir_entry = dir_entry?;
        let full_path = dir_entry.path();
        // Follows symlinks, so linked folders are listed too.
        if !full_path.is_dir() {
            continue;
        }
        entries.push(FolderEntry {
            name: dir_entry.file_name().to_string_lossy().into_owned(),
            full_path,
            selected: false,
        });
    }

    entries.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name))
    });
    Ok(entries)
}
