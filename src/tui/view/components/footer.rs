use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render_browse_footer(f: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(vec![
        Span::styled("↑↓", Style::default().fg(Color::Cyan)),
        Span::raw(" Nav  "),
        Span::styled("Space", Style::default().fg(Color::Cyan)),
        Span::raw(" Select  "),
        Span::styled("a/c", Style::default().fg(Color::Cyan)),
        Span::raw(" All/Clear  "),
        Span::styled("s/w", Style::default().fg(Color::Cyan)),
        Span::raw(" Store/Web  "),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::raw(" Delete  "),
        Span::styled("o", Style::default().fg(Color::Cyan)),
        Span::raw(" Open  "),
        Span::styled("r", Style::default().fg(Color::Cyan)),
        Span::raw(" Refresh  "),
        Span::styled("?", Style::default().fg(Color::Cyan)),
        Span::raw(" Help  "),
        Span::styled("q", Style::default().fg(Color::Cyan)),
        Span::raw(" Quit"),
    ]))
    .block(Block::default().borders(Borders::TOP));

    f.render_widget(footer, area);
}
