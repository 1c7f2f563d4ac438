use crate::prompt::confirmation_message;
use crate::tui::state::{DeletionSummary, Notice, NoticeLevel};
use crate::tui::view::components::centered_rect;
use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_root_input_modal(f: &mut Frame, input: &str) {
    let area = centered_rect(70, 25, f.area());

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Folder whose subfolders you want to manage:",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(input, Style::default().fg(Color::Yellow)),
            Span::styled("█", Style::default().fg(Color::Yellow)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(Color::Green)),
            Span::raw(" Open     "),
            Span::styled("[Esc]", Style::default().fg(Color::Red)),
            Span::raw(" Cancel"),
        ]),
    ];

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .title(" Select Folder ")
                .borders(Borders::ALL),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

pub fn render_confirm_modal(f: &mut Frame, names: &[String]) {
    let area = centered_rect(70, 60, f.area());

    let mut text: Vec<Line> = confirmation_message(names)
        .lines()
        .map(|l| Line::from(l.to_string()))
        .collect();
    text.push(Line::from(""));
    text.push(Line::from(Span::styled(
        "This action cannot be undone.",
        Style::default().fg(Color::Red),
    )));
    text.push(Line::from(""));
    text.push(Line::from(vec![
        Span::styled("[y/Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Delete     "),
        Span::styled("[n/Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]));

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .title(" Confirm Deletion ")
                .borders(Borders::ALL),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

pub fn render_result_modal(f: &mut Frame, result: Option<&DeletionSummary>) {
    let area = centered_rect(70, 50, f.area());

    let text = if let Some(r) = result {
        let (heading, color) = if r.failed.is_empty() {
            ("Deletion Complete", Color::Green)
        } else {
            ("Deletion Partially Failed", Color::Red)
        };

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                heading,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Deleted: ", Style::default().fg(Color::Gray)),
                Span::styled(
                    format!("{} folder(s)", r.deleted.len()),
                    Style::default().fg(Color::Green),
                ),
            ]),
            Line::from(vec![
                Span::styled("Failed: ", Style::default().fg(Color::Gray)),
                Span::styled(
                    format!("{} folder(s)", r.failed.len()),
                    Style::default().fg(if r.failed.is_empty() {
                        Color::Green
                    } else {
                        Color::Red
                    }),
                ),
            ]),
        ];

        for failure in &r.failed {
            lines.push(Line::from(Span::styled(
                format!("- {}: {}", failure.name, failure.error),
                Style::default().fg(Color::Red),
            )));
        }

        lines.push(Line::from(vec![
            Span::styled("Duration: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{:.2}s", r.duration.as_secs_f64()),
                Style::default().fg(Color::Gray),
            ),
        ]));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Press Enter to continue",
            Style::default().fg(Color::DarkGray),
        )));
        lines
    } else {
        vec![Line::from("No result")]
    };

    let paragraph = Paragraph::new(text)
        .block(Block::default().title(" Result ").borders(Borders::ALL))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

pub fn render_notice_modal(f: &mut Frame, notice: Option<&Notice>) {
    let area = centered_rect(60, 30, f.area());

    let (title, message, color) = match notice {
        Some(n) => (
            n.title.as_str(),
            n.message.as_str(),
            match n.level {
                NoticeLevel::Info => Color::Cyan,
                NoticeLevel::Error => Color::Red,
            },
        ),
        None => ("Notice", "", Color::Cyan),
    };

    let mut text = vec![Line::from("")];
    text.extend(
        message
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(color)))),
    );
    text.push(Line::from(""));
    text.push(Line::from(Span::styled(
        "Press Enter to continue",
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .title(format!(" {} ", title))
                .borders(Borders::ALL),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

pub fn render_help_modal(f: &mut Frame) {
    let area = centered_rect(65, 65, f.area());

    let key = |k: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<7}", k), Style::default().fg(Color::Cyan)),
            Span::raw(desc),
        ])
    };
    let section = |name: &'static str| {
        Line::from(Span::styled(
            name,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
    };

    let help_text = vec![
        Line::from(Span::styled(
            "FolderSweep Help",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        section("Navigation"),
        key("↑/↓", "Move between folders"),
        key("o", "Choose another root folder"),
        key("r", "Re-read the root folder"),
        Line::from(""),
        section("Selection"),
        key("Space", "Toggle selection"),
        key("a", "Select all"),
        key("c/n", "Clear selection"),
        Line::from(""),
        section("Actions"),
        key("Enter", "Delete selected folders"),
        key("s", "Search the store for the highlighted folder"),
        key("w", "Search the web for the highlighted folder"),
        Line::from(""),
        key("?", "Show this help"),
        key("q", "Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "Press q, Esc, or ? to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph =
        Paragraph::new(help_text).block(Block::default().title(" Help ").borders(Borders::ALL));

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}
