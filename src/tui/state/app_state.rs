use crate::config::Config;
use crate::launcher::BrowserLauncher;
use crate::manager::FolderManager;
use crate::tui::state::{AppMode, DeletionSummary, Notice};
use ratatui::widgets::ListState;
use std::path::PathBuf;

pub struct App {
    pub config: Config,
    pub manager: FolderManager,
    pub launcher: Box<dyn BrowserLauncher>,
    pub list_state: ListState,
    pub mode: AppMode,
    pub prev_mode: Option<AppMode>,
    pub should_quit: bool,
    pub root_input: String,
    pub pending_delete: Vec<String>,
    pub deletion_summary: Option<DeletionSummary>,
    pub notice: Option<Notice>,
}

impl App {
    pub fn new(config: Config, manager: FolderManager, launcher: Box<dyn BrowserLauncher>) -> Self {
        let root_input = config
            .general
            .default_root
            .clone()
            .unwrap_or_else(|| initial_dir().display().to_string());

        Self {
            config,
            manager,
            launcher,
            list_state: ListState::default(),
            mode: AppMode::RootInput,
            prev_mode: None,
            should_quit: false,
            root_input,
            pending_delete: Vec::new(),
            deletion_summary: None,
            notice: None,
        }
    }
}

/// Where the root prompt starts when nothing is configured.
pub fn initial_dir() -> PathBuf {
    if cfg!(target_os = "windows") {
        for drive in ["C:\\", "D:\\", "E:\\", "F:\\"] {
            let path = PathBuf::from(drive);
            if path.exists() {
                return path;
            }
        }
        PathBuf::from("C:\\")
    } else if cfg!(target_os = "macos") {
        PathBuf::from("/Volumes")
    } else {
        dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"))
    }
}
