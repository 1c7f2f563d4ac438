use crate::manager::{DeletionReport, FailedDeletion};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct DeletionSummary {
    pub deleted: Vec<String>,
    pub failed: Vec<FailedDeletion>,
    pub refresh_error: Option<String>,
    pub duration: Duration,
}

impl DeletionSummary {
    pub fn from_report(report: &DeletionReport, duration: Duration) -> Self {
        Self {
            deleted: report.succeeded.clone(),
            failed: report.failed.clone(),
            refresh_error: report.refresh_error.as_ref().map(|e| e.to_string()),
            duration,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NoticeLevel {
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub title: String,
    pub message: String,
    pub level: NoticeLevel,
}

impl Notice {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            level: NoticeLevel::Info,
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            level: NoticeLevel::Error,
        }
    }
}
