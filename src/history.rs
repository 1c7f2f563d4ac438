use crate::config::Config;
use anyhow::Result;
use chrono::{DateTime, Utc};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryAction {
    Deleted,
    Failed,
}

impl HistoryAction {
    fn as_str(self) -> &'static str {
        match self {
            HistoryAction::Deleted => "DELETED",
            HistoryAction::Failed => "FAILED",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "DELETED" => Some(HistoryAction::Deleted),
            "FAILED" => Some(HistoryAction::Failed),
            _ => None,
        }
    }
}

impl std::fmt::Display for HistoryAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub timestamp: DateTime<Utc>,
    pub action: HistoryAction,
    pub path: PathBuf,
    pub error: Option<String>,
}

impl HistoryEntry {
    pub fn new(action: HistoryAction, path: PathBuf) -> Self {
        Self {
            timestamp: Utc::now(),
            action,
            path,
            error: None,
        }
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    // Tab separated: folder names routinely contain spaces.
    pub fn to_log_line(&self) -> String {
        let error_str = self
            .error
            .as_deref()
            .map(|e| format!("\t{}", e.replace(&['\t', '\n'][..], " ")))
            .unwrap_or_default();
        format!(
            "{}\t{}\t{}{}\n",
            self.timestamp.to_rfc3339(),
            self.action,
            self.path.display(),
            error_str
        )
    }

    fn parse_line(line: &str) -> Option<Self> {
        let parts: Vec<&str> = line.splitn(4, '\t').collect();
        if parts.len() < 3 {
            return None;
        }

        let timestamp = DateTime::parse_from_rfc3339(parts[0])
            .ok()?
            .with_timezone(&Utc);
        let action = HistoryAction::parse(parts[1])?;
        let path = PathBuf::from(parts[2]);
        let error = parts.get(3).map(|s| s.to_string());

        Some(Self {
            timestamp,
            action,
            path,
            error,
        })
    }
}

pub struct HistoryLogger {
    log_path: PathBuf,
}

impl HistoryLogger {
    pub fn new() -> Self {
        Self::at(Config::data_dir().join("history.log"))
    }

    pub fn at(log_path: impl Into<PathBuf>) -> Self {
        Self {
            log_path: log_path.into(),
        }
    }

    pub fn log(&self, entry: &HistoryEntry) -> Result<()> {
        if let Some(parent) = self.log_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)?;

        write!(file, "{}", entry.to_log_line())?;
        Ok(())
    }

    pub fn log_delete(&self, path: &Path) -> Result<()> {
        self.log(&HistoryEntry::new(HistoryAction::Deleted, path.to_path_buf()))
    }

    pub fn log_failure(&self, path: &Path, error: &str) -> Result<()> {
        self.log(&HistoryEntry::new(HistoryAction::Failed, path.to_path_buf()).with_error(error))
    }

    /// Most recent entries first.
    pub fn read_history(&self, limit: Option<usize>) -> Result<Vec<HistoryEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.log_path)?;
        let entries = content.lines().rev().filter_map(HistoryEntry::parse_line);

        let result = match limit {
            Some(n) => entries.take(n).collect(),
            None => entries.collect(),
        };

        Ok(result)
    }

    pub fn path(&self) -> &Path {
        &self.log_path
    }
}

impl Default for HistoryLogger {
    fn default() -> Self {
        Self::new()
    }
}
