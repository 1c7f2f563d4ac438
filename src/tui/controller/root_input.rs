use crate::manager::FolderManager;
use crate::tui::controller::common::apply_listing;
use crate::tui::state::{AppMode, Notice};
use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::widgets::ListState;

pub struct RootInputContext<'a> {
    pub root_input: &'a mut String,
    pub manager: &'a mut FolderManager,
    pub list_state: &'a mut ListState,
    pub notice: &'a mut Option<Notice>,
    pub mode: &'a mut AppMode,
    pub should_quit: &'a mut bool,
}

pub fn handle_root_input_key(ctx: &mut RootInputContext, code: KeyCode) -> Result<()> {
    match code {
        KeyCode::Char(c) => ctx.root_input.push(c),
        KeyCode::Backspace => {
            ctx.root_input.pop();
        }
        KeyCode::Enter => {
            let path = ctx.root_input.trim().to_string();
            if path.is_empty() {
                return Ok(());
            }
            let result = ctx.manager.select_root(&path);
            apply_listing(result, ctx.list_state, ctx.notice, ctx.mode);
        }
        // Cancelling keeps whatever was listed before.
        KeyCode::Esc => {
            if ctx.manager.root().is_some() {
                *ctx.mode = AppMode::Browse;
            } else {
                *ctx.should_quit = true;
            }
        }
        _ => {}
    }
    Ok(())
}
