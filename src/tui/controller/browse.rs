use crate::config::SearchConfig;
use crate::launcher::BrowserLauncher;
use crate::manager::FolderManager;
use crate::tui::controller::common::apply_listing;
use crate::tui::logic::{focused_entry, navigate_down, navigate_up, toggle_focused};
use crate::tui::state::{AppMode, Notice};
use anyhow::Result;
use crossterm::event::KeyCode;
use log::warn;
use ratatui::widgets::ListState;

pub struct BrowseContext<'a> {
    pub manager: &'a mut FolderManager,
    pub list_state: &'a mut ListState,
    pub launcher: &'a dyn BrowserLauncher,
    pub search: &'a SearchConfig,
    pub root_input: &'a mut String,
    pub pending_delete: &'a mut Vec<String>,
    pub notice: &'a mut Option<Notice>,
    pub mode: &'a mut AppMode,
    pub prev_mode: &'a mut Option<AppMode>,
    pub should_quit: &'a mut bool,
}

#[derive(Clone, Copy)]
enum LinkKind {
    Store,
    Web,
}

pub fn handle_browse_key(ctx: &mut BrowseContext, code: KeyCode) -> Result<()> {
    match code {
        KeyCode::Char('q') => *ctx.should_quit = true,
        KeyCode::Up | KeyCode::Char('k') => navigate_up(ctx.list_state),
        KeyCode::Down | KeyCode::Char('j') => {
            navigate_down(ctx.list_state, ctx.manager.entries().len())
        }
        KeyCode::Char(' ') => toggle_focused(ctx.manager, ctx.list_state),
        KeyCode::Char('a') => ctx.manager.set_all_selected(),
        KeyCode::Char('c') | KeyCode::Char('n') => ctx.manager.clear_selection(),
        KeyCode::Enter | KeyCode::Char('d') | KeyCode::Delete => {
            let names = ctx.manager.selected_names();
            if names.is_empty() {
                *ctx.notice = Some(Notice::info(
                    "Nothing Selected",
                    "No folders are selected for deletion.",
                ));
                *ctx.mode = AppMode::Notice;
            } else {
                *ctx.pending_delete = names;
                *ctx.mode = AppMode::ConfirmDelete;
            }
        }
        KeyCode::Char('o') => {
            if let Some(root) = ctx.manager.root() {
                *ctx.root_input = root.display().to_string();
            }
            *ctx.mode = AppMode::RootInput;
        }
        KeyCode::Char('r') => {
            let result = ctx.manager.refresh();
            apply_listing(result, ctx.list_state, ctx.notice, ctx.mode);
        }
        KeyCode::Char('s') => open_link(ctx, LinkKind::Store),
        KeyCode::Char('w') => open_link(ctx, LinkKind::Web),
        KeyCode::Char('?') => {
            *ctx.prev_mode = Some(*ctx.mode);
            *ctx.mode = AppMode::Help;
        }
        _ => {}
    }
    Ok(())
}

fn open_link(ctx: &mut BrowseContext, kind: LinkKind) {
    let Some(entry) = focused_entry(ctx.manager, ctx.list_state) else {
        return;
    };
    let links = ctx.search.links(&entry.name);
    let url = match kind {
        LinkKind::Store => links.store_search_url,
        LinkKind::Web => links.web_search_url,
    };

    if let Err(e) = ctx.launcher.open_url(&url) {
        warn!("{}", e);
        *ctx.notice = Some(Notice::error("Browser Error", e.to_string()));
        *ctx.mode = AppMode::Notice;
    }
}
