//! # Reminders UI
//!
//! The reminders list and recent activity.

use crate::tui::ui::titled_block;
use crate::tui::App;
use ratatui::prelude::*;
use ratatui::widgets::{List, ListItem, Paragraph};

/// Render the reminders screen
pub fn render_reminders(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Reminder list
            Constraint::Length(6), // Activity
        ])
        .split(area);

    render_list(frame, app, chunks[0]);
    render_activity(frame, app, chunks[1]);
}

fn render_list(frame: &mut Frame, app: &App, area: Rect) {
    let section = app.reminders.render();

    if let Some(notice) = &section.notice {
        let paragraph = Paragraph::new(notice.as_str())
            .block(titled_block(&section.heading))
            .style(Style::default().fg(Color::Red));
        frame.render_widget(paragraph, area);
        return;
    }

    // One item per node: first value bold, the rest plain
    let items: Vec<ListItem> = section
        .nodes
        .iter()
        .enumerate()
        .map(|(i, node)| {
            let is_selected = i == app.selected_index;
            let prefix = if is_selected { "> " } else { "  " };

            let lines: Vec<Line> = node
                .values
                .iter()
                .enumerate()
                .map(|(j, value)| {
                    let lead = if j == 0 { prefix } else { "  " };
                    let style = if j == 0 {
                        Style::default().add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::Gray)
                    };
                    Line::from(vec![Span::raw(lead), Span::styled(value.clone(), style)])
                })
                .collect();

            let style = if is_selected {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(lines).style(style)
        })
        .collect();

    let list = List::new(items).block(titled_block(&section.heading));
    frame.render_widget(list, area);
}

fn render_activity(frame: &mut Frame, app: &App, area: Rect) {
    let visible = area.height.saturating_sub(2) as usize;
    let items: Vec<ListItem> = app
        .activity_log
        .iter()
        .rev()
        .take(visible)
        .map(|entry| ListItem::new(entry.as_str()).style(Style::default().fg(Color::DarkGray)))
        .collect();

    frame.render_widget(List::new(items).block(titled_block("Activity")), area);
}
