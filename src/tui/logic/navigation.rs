use ratatui::widgets::ListState;

pub fn navigate_up(list_state: &mut ListState) {
    if let Some(current) = list_state.selected() {
        if current > 0 {
            list_state.select(Some(current - 1));
        }
    }
}

pub fn navigate_down(list_state: &mut ListState, max_items: usize) {
    let max = max_items.saturating_sub(1);
    match list_state.selected() {
        Some(current) if current < max => list_state.select(Some(current + 1)),
        None if max_items > 0 => list_state.select(Some(0)),
        _ => {}
    }
}

/// Keeps the cursor inside a list that may have shrunk or been rebuilt.
pub fn clamp_selection(list_state: &mut ListState, len: usize) {
    if len == 0 {
        list_state.select(None);
        return;
    }
    let current = list_state.selected().unwrap_or(0);
    list_state.select(Some(current.min(len - 1)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_stays_in_bounds() {
        let mut state = ListState::default();
        navigate_down(&mut state, 2);
        assert_eq!(state.selected(), Some(0));
        navigate_down(&mut state, 2);
        navigate_down(&mut state, 2);
        assert_eq!(state.selected(), Some(1));
        navigate_up(&mut state);
        navigate_up(&mut state);
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut state = ListState::default();
        state.select(Some(4));
        clamp_selection(&mut state, 2);
        assert_eq!(state.selected(), Some(1));
        clamp_selection(&mut state, 0);
        assert_eq!(state.selected(), None);
    }
}
