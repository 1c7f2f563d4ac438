use crate::manager::{FolderEntry, FolderManager};
use ratatui::widgets::ListState;

pub fn focused_entry<'a>(manager: &'a FolderManager, list_state: &ListState) -> Option<&'a FolderEntry> {
    manager.entries().get(list_state.selected()?)
}

pub fn toggle_focused(manager: &mut FolderManager, list_state: &ListState) {
    if let Some(name) = focused_entry(manager, list_state).map(|e| e.name.clone()) {
        manager.toggle(&name);
    }
}
