use crate::manager::{DeletionReport, FolderEntry, ListingOutcome};
use crate::search::SearchLinks;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const SCHEMA_VERSION: &str = "1.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingResult {
    pub version: String,
    pub timestamp: DateTime<Utc>,
    pub root: PathBuf,
    pub is_directory: bool,
    pub folder_count: usize,
    pub folders: Vec<FolderItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderItem {
    pub name: String,
    pub path: PathBuf,
    pub store_search_url: String,
    pub web_search_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletionResult {
    pub version: String,
    pub timestamp: DateTime<Utc>,
    pub root: PathBuf,
    pub status: ExecutionStatus,
    pub deleted: Vec<String>,
    pub failed: Vec<FailedItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_error: Option<String>,
    pub remaining: Vec<String>,
    pub duration_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailedItem {
    pub name: String,
    pub error: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionStatus {
    Success,
    Partial,
    Failed,
    Cancelled,
    Nothing,
}

impl ExecutionStatus {
    pub fn from_report(report: &DeletionReport) -> Self {
        match (report.succeeded.len(), report.failed.len()) {
            (0, 0) => ExecutionStatus::Nothing,
            (_, 0) => ExecutionStatus::Success,
            (0, _) => ExecutionStatus::Failed,
            _ => ExecutionStatus::Partial,
        }
    }
}

impl ListingResult {
    pub fn new(
        root: &Path,
        outcome: ListingOutcome,
        entries: &[FolderEntry],
        links: impl Fn(&str) -> SearchLinks,
    ) -> Self {
        let folders: Vec<FolderItem> = entries
            .iter()
            .map(|entry| {
                let l = links(&entry.name);
                FolderItem {
                    name: entry.name.clone(),
                    path: entry.full_path.clone(),
                    store_search_url: l.store_search_url,
                    web_search_url: l.web_search_url,
                }
            })
            .collect();

        Self {
            version: SCHEMA_VERSION.to_string(),
            timestamp: Utc::now(),
            root: root.to_path_buf(),
            is_directory: outcome != ListingOutcome::NotADirectory,
            folder_count: folders.len(),
            folders,
        }
    }
}

impl DeletionResult {
    pub fn new(
        root: &Path,
        report: &DeletionReport,
        remaining: &[FolderEntry],
        duration_ms: u64,
    ) -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            timestamp: Utc::now(),
            root: root.to_path_buf(),
            status: ExecutionStatus::from_report(report),
            deleted: report.succeeded.clone(),
            failed: report
                .failed
                .iter()
                .map(|f| FailedItem {
                    name: f.name.clone(),
                    error: f.error.clone(),
                })
                .collect(),
            refresh_error: report.refresh_error.as_ref().map(|e| e.to_string()),
            remaining: remaining.iter().map(|e| e.name.clone()).collect(),
            duration_ms,
        }
    }

    pub fn cancelled(root: &Path, remaining: &[FolderEntry]) -> Self {
        Self {
            status: ExecutionStatus::Cancelled,
            ..Self::new(root, &DeletionReport::default(), remaining, 0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manager::FailedDeletion;
    use crate::search::build_search_links;

    #[test]
    fn test_status_from_report() {
        let mut report = DeletionReport::default();
        assert_eq!(ExecutionStatus::from_report(&report), ExecutionStatus::Nothing);

        report.succeeded.push("a".into());
        assert_eq!(ExecutionStatus::from_report(&report), ExecutionStatus::Success);

        report.failed.push(FailedDeletion {
            name: "b".into(),
            error: "Permission denied".into(),
        });
        assert_eq!(ExecutionStatus::from_report(&report), ExecutionStatus::Partial);

        report.succeeded.clear();
        assert_eq!(ExecutionStatus::from_report(&report), ExecutionStatus::Failed);
    }

    #[test]
    fn test_listing_json_shape() {
        let entries = vec![FolderEntry {
            name: "Half Life 2".into(),
            full_path: PathBuf::from("/t/Half Life 2"),
            selected: false,
        }];
        let result = ListingResult::new(
            Path::new("/t"),
            ListingOutcome::Listed(1),
            &entries,
            build_search_links,
        );
        let json = serde_json::to_value(&result).expect("json");
        assert_eq!(json["folder_count"], 1);
        assert_eq!(json["is_directory"], true);
        assert_eq!(
            json["folders"][0]["web_search_url"],
            "https://duckduckgo.com/?q=Half+Life+2"
        );
    }

    #[test]
    fn test_cancelled_result() {
        let result = DeletionResult::cancelled(Path::new("/t"), &[]);
        let json = serde_json::to_value(&result).expect("json");
        assert_eq!(json["status"], "cancelled");
        assert!(json.get("refresh_error").is_none());
    }
}
