use crate::error::ManagerError;
use crate::manager::{FolderManager, ListingOutcome};
use crate::tui::logic::clamp_selection;
use crate::tui::state::{AppMode, DeletionSummary, Notice};
use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::widgets::ListState;
use std::time::Instant;

/// Turns a listing result into cursor state plus an optional notice.
pub fn apply_listing(
    result: Result<ListingOutcome, ManagerError>,
    list_state: &mut ListState,
    notice: &mut Option<Notice>,
    mode: &mut AppMode,
) {
    list_state.select(None);
    match result {
        Ok(ListingOutcome::Listed(count)) => {
            clamp_selection(list_state, count);
            *mode = AppMode::Browse;
        }
        Ok(ListingOutcome::NotADirectory) => {
            *notice = Some(Notice::info(
                "Not a Folder",
                "The selected path is not a folder. Choose a folder to list its subfolders.",
            ));
            *mode = AppMode::Notice;
        }
        Err(e) => {
            *notice = Some(Notice::error("Error Listing Folders", e.to_string()));
            *mode = AppMode::Notice;
        }
    }
}

pub struct ConfirmContext<'a> {
    pub manager: &'a mut FolderManager,
    pub list_state: &'a mut ListState,
    pub pending_delete: &'a mut Vec<String>,
    pub deletion_summary: &'a mut Option<DeletionSummary>,
    pub notice: &'a mut Option<Notice>,
    pub mode: &'a mut AppMode,
}

pub fn handle_confirm_key(ctx: &mut ConfirmContext, code: KeyCode) -> Result<()> {
    match code {
        KeyCode::Char('y') | KeyCode::Enter => {
            let start = Instant::now();
            let report = ctx.manager.delete_selected();
            ctx.pending_delete.clear();

            *ctx.deletion_summary = Some(DeletionSummary::from_report(&report, start.elapsed()));
            clamp_selection(ctx.list_state, ctx.manager.entries().len());
            if let Some(e) = report.refresh_error {
                *ctx.notice = Some(Notice::error("Error Listing Folders", e.to_string()));
            }
            *ctx.mode = AppMode::ResultDisplay;
        }
        KeyCode::Char('n') | KeyCode::Esc => {
            ctx.pending_delete.clear();
            *ctx.mode = AppMode::Browse;
        }
        _ => {}
    }
    Ok(())
}

pub struct ResultContext<'a> {
    pub notice: &'a Option<Notice>,
    pub mode: &'a mut AppMode,
}

pub fn handle_result_key(ctx: &mut ResultContext, code: KeyCode) -> Result<()> {
    if matches!(code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q')) {
        *ctx.mode = if ctx.notice.is_some() {
            AppMode::Notice
        } else {
            AppMode::Browse
        };
    }
    Ok(())
}

pub struct NoticeContext<'a> {
    pub notice: &'a mut Option<Notice>,
    pub mode: &'a mut AppMode,
}

pub fn handle_notice_key(ctx: &mut NoticeContext, code: KeyCode) -> Result<()> {
    if matches!(code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q')) {
        *ctx.notice = None;
        *ctx.mode = AppMode::Browse;
    }
    Ok(())
}

pub struct HelpContext<'a> {
    pub mode: &'a mut AppMode,
    pub prev_mode: &'a mut Option<AppMode>,
}

pub fn handle_help_key(ctx: &mut HelpContext, code: KeyCode) -> Result<()> {
    if matches!(code, KeyCode::Char('q') | KeyCode::Esc | KeyCode::Char('?')) {
        *ctx.mode = ctx.prev_mode.unwrap_or(AppMode::Browse);
        *ctx.prev_mode = None;
    }
    Ok(())
}
