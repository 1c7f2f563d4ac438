use crate::config::SearchConfig;
use crate::manager::FolderManager;
use crate::tui::logic::focused_entry;
use crate::tui::view::components::footer::render_browse_footer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

pub struct BrowseData<'a> {
    pub manager: &'a FolderManager,
    pub list_state: &'a mut ListState,
    pub search: &'a SearchConfig,
}

pub fn render_browse(f: &mut Frame, data: &mut BrowseData) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(4),
            Constraint::Length(2),
        ])
        .split(f.area());

    render_header(f, chunks[0], data.manager);
    render_folder_list(f, chunks[1], data.manager, data.list_state);
    render_search_panel(f, chunks[2], data);
    render_browse_footer(f, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect, manager: &FolderManager) {
    let path_str = manager
        .root()
        .map(|p| format!("Selected: {}", p.display()))
        .unwrap_or_else(|| "No folder selected".to_string());
    let selected = manager.selected_entries().len();

    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            " FolderSweep ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(path_str, Style::default().fg(Color::Green)),
        Span::raw("  "),
        Span::styled(
            format!("[{}/{} selected]", selected, manager.entries().len()),
            Style::default().fg(Color::Yellow),
        ),
    ]))
    .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, area);
}

fn render_folder_list(f: &mut Frame, area: Rect, manager: &FolderManager, list_state: &mut ListState) {
    if manager.entries().is_empty() {
        let text = if manager.root().is_some() {
            "No subfolders found in the selected directory."
        } else {
            "Press o to choose a folder."
        };
        let empty = Paragraph::new(Span::styled(text, Style::default().fg(Color::DarkGray)))
            .block(Block::default().borders(Borders::NONE));
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = manager
        .entries()
        .iter()
        .map(|entry| {
            let (checkbox, style) = if entry.selected {
                (
                    "[x] ",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )
            } else {
                ("[ ] ", Style::default().fg(Color::White))
            };
            ListItem::new(Line::from(vec![
                Span::styled(checkbox, style),
                Span::styled(entry.name.clone(), style),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::NONE).title(Span::styled(
            "Folders",
            Style::default().fg(Color::Yellow),
        )))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    f.render_stateful_widget(list, area, list_state);
}

fn render_search_panel(f: &mut Frame, area: Rect, data: &BrowseData) {
    let lines = match focused_entry(data.manager, &*data.list_state) {
        Some(entry) => {
            let links = data.search.links(&entry.name);
            vec![
                Line::from(vec![
                    Span::styled("s ", Style::default().fg(Color::Cyan)),
                    Span::styled("Store  ", Style::default().fg(Color::Gray)),
                    Span::styled(links.store_search_url, Style::default().fg(Color::Blue)),
                ]),
                Line::from(vec![
                    Span::styled("w ", Style::default().fg(Color::Cyan)),
                    Span::styled("Web    ", Style::default().fg(Color::Gray)),
                    Span::styled(links.web_search_url, Style::default().fg(Color::Blue)),
                ]),
            ]
        }
        None => vec![Line::from(Span::styled(
            "Highlight a folder to search for it.",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    let panel = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::TOP).title(" Search "));
    f.render_widget(panel, area);
}
