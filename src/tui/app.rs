use crate::tui::state::App;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::path::Path;
use std::time::Duration;

use crate::tui::controller::browse::BrowseContext;
use crate::tui::controller::common::{
    apply_listing, ConfirmContext, HelpContext, NoticeContext, ResultContext,
};
use crate::tui::controller::root_input::RootInputContext;
use crate::tui::controller::{
    handle_browse_key, handle_confirm_key, handle_help_key, handle_notice_key,
    handle_result_key, handle_root_input_key,
};
use crate::tui::state::AppMode;
use crate::tui::view::components::modal::{
    render_confirm_modal, render_help_modal, render_notice_modal, render_result_modal,
    render_root_input_modal,
};
use crate::tui::view::{render_browse, BrowseData};

impl App {
    /// Lists `path` right away instead of starting at the root prompt.
    pub fn open_root(&mut self, path: &Path) {
        self.root_input = path.display().to_string();
        let result = self.manager.select_root(path);
        apply_listing(result, &mut self.list_state, &mut self.notice, &mut self.mode);
    }

    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code)?;
                    }
                }
            }
        }

        Ok(())
    }

    pub(crate) fn handle_key(&mut self, code: KeyCode) -> Result<()> {
        match self.mode {
            AppMode::Browse => {
                let mut ctx = BrowseContext {
                    manager: &mut self.manager,
                    list_state: &mut self.list_state,
                    launcher: self.launcher.as_ref(),
                    search: &self.config.search,
                    root_input: &mut self.root_input,
                    pending_delete: &mut self.pending_delete,
                    notice: &mut self.notice,
                    mode: &mut self.mode,
                    prev_mode: &mut self.prev_mode,
                    should_quit: &mut self.should_quit,
                };
                handle_browse_key(&mut ctx, code)
            }
            AppMode::RootInput => {
                let mut ctx = RootInputContext {
                    root_input: &mut self.root_input,
                    manager: &mut self.manager,
                    list_state: &mut self.list_state,
                    notice: &mut self.notice,
                    mode: &mut self.mode,
                    should_quit: &mut self.should_quit,
                };
                handle_root_input_key(&mut ctx, code)
            }
            AppMode::ConfirmDelete => {
                let mut ctx = ConfirmContext {
                    manager: &mut self.manager,
                    list_state: &mut self.list_state,
                    pending_delete: &mut self.pending_delete,
                    deletion_summary: &mut self.deletion_summary,
                    notice: &mut self.notice,
                    mode: &mut self.mode,
                };
                handle_confirm_key(&mut ctx, code)
            }
            AppMode::ResultDisplay => {
                let mut ctx = ResultContext {
                    notice: &self.notice,
                    mode: &mut self.mode,
                };
                handle_result_key(&mut ctx, code)
            }
            AppMode::Notice => {
                let mut ctx = NoticeContext {
                    notice: &mut self.notice,
                    mode: &mut self.mode,
                };
                handle_notice_key(&mut ctx, code)
            }
            AppMode::Help => {
                let mut ctx = HelpContext {
                    mode: &mut self.mode,
                    prev_mode: &mut self.prev_mode,
                };
                handle_help_key(&mut ctx, code)
            }
        }
    }

    fn render(&mut self, f: &mut ratatui::Frame) {
        let mut data = BrowseData {
            manager: &self.manager,
            list_state: &mut self.list_state,
            search: &self.config.search,
        };
        render_browse(f, &mut data);

        match self.mode {
            AppMode::RootInput => render_root_input_modal(f, &self.root_input),
            AppMode::ConfirmDelete => render_confirm_modal(f, &self.pending_delete),
            AppMode::ResultDisplay => render_result_modal(f, self.deletion_summary.as_ref()),
            AppMode::Notice => render_notice_modal(f, self.notice.as_ref()),
            AppMode::Help => render_help_modal(f),
            AppMode::Browse => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::error::DeletionError;
    use crate::launcher::testing::RecordingLauncher;
    use crate::error::LaunchError;
    use crate::launcher::BrowserLauncher;
    use crate::manager::{FolderEntry, FolderManager, FolderRemover};
    use crate::tui::state::NoticeLevel;
    use std::fs;
    use std::rc::Rc;

    struct SharedLauncher(Rc<RecordingLauncher>);

    impl BrowserLauncher for SharedLauncher {
        fn open_url(&self, url: &str) -> Result<(), LaunchError> {
            self.0.open_url(url)
        }
    }

    fn temp_root(names: &[&str]) -> tempfile::TempDir {
        let root = tempfile::tempdir().expect("tempdir");
        for name in names {
            fs::create_dir(root.path().join(name)).expect("mkdir");
        }
        root
    }

    fn app_with(launcher: RecordingLauncher) -> (App, Rc<RecordingLauncher>) {
        let shared = Rc::new(launcher);
        let app = App::new(
            Config::default(),
            FolderManager::new(),
            Box::new(SharedLauncher(Rc::clone(&shared))),
        );
        (app, shared)
    }

    fn press(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            app.handle_key(*key).expect("key");
        }
    }

    #[test]
    fn test_starts_at_root_prompt_and_lists_on_enter() {
        let root = temp_root(&["b", "A"]);
        let (mut app, _) = app_with(RecordingLauncher::default());
        assert_eq!(app.mode, AppMode::RootInput);

        app.root_input.clear();
        for c in root.path().display().to_string().chars() {
            press(&mut app, &[KeyCode::Char(c)]);
        }
        press(&mut app, &[KeyCode::Enter]);

        assert_eq!(app.mode, AppMode::Browse);
        assert_eq!(app.manager.entries().len(), 2);
        assert_eq!(app.list_state.selected(), Some(0));
    }

    #[test]
    fn test_cancel_root_prompt_keeps_listing() {
        let root = temp_root(&["a"]);
        let (mut app, _) = app_with(RecordingLauncher::default());
        app.open_root(root.path());

        press(&mut app, &[KeyCode::Char('o'), KeyCode::Backspace, KeyCode::Esc]);
        assert_eq!(app.mode, AppMode::Browse);
        assert_eq!(app.manager.root(), Some(root.path()));
        assert_eq!(app.manager.entries().len(), 1);
    }

    #[test]
    fn test_missing_root_shows_error_notice() {
        let root = temp_root(&[]);
        let (mut app, _) = app_with(RecordingLauncher::default());
        app.open_root(&root.path().join("missing"));

        assert_eq!(app.mode, AppMode::Notice);
        let notice = app.notice.as_ref().expect("notice");
        assert_eq!(notice.level, NoticeLevel::Error);

        press(&mut app, &[KeyCode::Enter]);
        assert_eq!(app.mode, AppMode::Browse);
        assert!(app.notice.is_none());
    }

    #[test]
    fn test_delete_with_nothing_selected_only_notifies() {
        let root = temp_root(&["a"]);
        let (mut app, _) = app_with(RecordingLauncher::default());
        app.open_root(root.path());

        press(&mut app, &[KeyCode::Enter]);
        assert_eq!(app.mode, AppMode::Notice);
        assert_eq!(
            app.notice.as_ref().map(|n| n.title.as_str()),
            Some("Nothing Selected")
        );
        assert!(root.path().join("a").exists());
    }

    #[test]
    fn test_declined_confirmation_changes_nothing() {
        let root = temp_root(&["a", "b"]);
        let (mut app, _) = app_with(RecordingLauncher::default());
        app.open_root(root.path());

        press(&mut app, &[KeyCode::Char(' '), KeyCode::Enter]);
        assert_eq!(app.mode, AppMode::ConfirmDelete);
        assert_eq!(app.pending_delete, vec!["a".to_string()]);

        press(&mut app, &[KeyCode::Char('n')]);
        assert_eq!(app.mode, AppMode::Browse);
        assert!(root.path().join("a").exists());
        assert_eq!(app.manager.selected_names(), vec!["a".to_string()]);
    }

    #[test]
    fn test_confirmed_delete_reports_and_relists() {
        let root = temp_root(&["a", "b", "c"]);
        let (mut app, _) = app_with(RecordingLauncher::default());
        app.open_root(root.path());

        press(
            &mut app,
            &[
                KeyCode::Down,
                KeyCode::Char(' '),
                KeyCode::Down,
                KeyCode::Char(' '),
                KeyCode::Char('d'),
                KeyCode::Char('y'),
            ],
        );

        assert_eq!(app.mode, AppMode::ResultDisplay);
        let summary = app.deletion_summary.as_ref().expect("summary");
        assert_eq!(summary.deleted, vec!["b".to_string(), "c".to_string()]);
        assert!(summary.failed.is_empty());
        assert_eq!(app.manager.entries().len(), 1);
        assert_eq!(app.list_state.selected(), Some(0));

        press(&mut app, &[KeyCode::Enter]);
        assert_eq!(app.mode, AppMode::Browse);
    }

    #[test]
    fn test_failed_delete_is_listed_in_summary() {
        struct Refuse;
        impl FolderRemover for Refuse {
            fn remove(&self, _root: &Path, _entry: &FolderEntry) -> Result<(), DeletionError> {
                Err(DeletionError::Refused("in use".to_string()))
            }
        }

        let root = temp_root(&["a"]);
        let mut app = App::new(
            Config::default(),
            FolderManager::with_remover(Box::new(Refuse)),
            Box::new(RecordingLauncher::default()),
        );
        app.open_root(root.path());
        press(&mut app, &[KeyCode::Char('a'), KeyCode::Enter, KeyCode::Enter]);

        let summary = app.deletion_summary.as_ref().expect("summary");
        assert!(summary.deleted.is_empty());
        assert_eq!(summary.failed.len(), 1);
        assert!(app.manager.selected_entries().is_empty());
    }

    #[test]
    fn test_search_keys_open_focused_folder() {
        let root = temp_root(&["Half Life 2"]);
        let (mut app, launcher) = app_with(RecordingLauncher::default());
        app.open_root(root.path());

        press(&mut app, &[KeyCode::Char('s'), KeyCode::Char('w')]);
        assert_eq!(
            *launcher.opened.borrow(),
            vec![
                "https://store.steampowered.com/search/?term=Half+Life+2".to_string(),
                "https://duckduckgo.com/?q=Half+Life+2".to_string(),
            ]
        );
    }

    #[test]
    fn test_launch_failure_is_reported() {
        let root = temp_root(&["a"]);
        let (mut app, _) = app_with(RecordingLauncher {
            fail: true,
            ..Default::default()
        });
        app.open_root(root.path());

        press(&mut app, &[KeyCode::Char('w')]);
        assert_eq!(app.mode, AppMode::Notice);
        assert_eq!(
            app.notice.as_ref().map(|n| n.title.as_str()),
            Some("Browser Error")
        );
        assert_eq!(app.manager.entries().len(), 1);
    }

    #[test]
    fn test_help_returns_to_browse() {
        let root = temp_root(&["a"]);
        let (mut app, _) = app_with(RecordingLauncher::default());
        app.open_root(root.path());

        press(&mut app, &[KeyCode::Char('?')]);
        assert_eq!(app.mode, AppMode::Help);
        press(&mut app, &[KeyCode::Esc]);
        assert_eq!(app.mode, AppMode::Browse);
    }
}
