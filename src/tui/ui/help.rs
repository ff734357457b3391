//! # Help UI
//!
//! Keybindings and usage help.

use crate::tui::ui::titled_block;
use crate::tui::App;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// Render the help screen
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_keybindings(frame, chunks[0]);
    render_about(frame, app, chunks[1]);
}

fn render_keybindings(frame: &mut Frame, area: Rect) {
    let keybindings = vec![
        (
            "General",
            vec![
                ("q", "Quit application"),
                ("Ctrl+c", "Force quit"),
                ("?", "Show this help"),
                ("1", "Reminders"),
                ("Esc", "Back to reminders"),
            ],
        ),
        (
            "Navigation",
            vec![
                ("j / Down", "Move down"),
                ("k / Up", "Move up"),
                ("g / Home", "Go to top"),
                ("G / End", "Go to bottom"),
            ],
        ),
    ];

    let mut lines = vec![];

    for (section, bindings) in keybindings {
        lines.push(Line::from(Span::styled(
            section,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));

        for (key, desc) in bindings {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<15}", key), Style::default().fg(Color::Cyan)),
                Span::raw(desc),
            ]));
        }

        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines)
        .block(titled_block("Keybindings"))
        .style(Style::default().fg(Color::White));

    frame.render_widget(paragraph, area);
}

fn render_about(frame: &mut Frame, app: &App, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Reminders [1]",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from("  Loaded once when the app starts"),
        Line::from("  Restart to pick up new reminders"),
        Line::from(""),
        Line::from(vec![
            Span::styled("Backend: ", Style::default().fg(Color::DarkGray)),
            Span::styled(app.api_base_url.as_str(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!("Remex TUI v{}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(titled_block("About"))
        .style(Style::default().fg(Color::White));

    frame.render_widget(paragraph, area);
}
