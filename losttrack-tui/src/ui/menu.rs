use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::{App, MENU_ENTRIES};

/// Render the main menu
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Lost&Tracker ")
        .border_style(Style::default().fg(app.view.color()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tagline
            Constraint::Min(0),    // Actions
        ])
        .split(inner);

    let tagline = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Track lost-and-found items",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(tagline, chunks[0]);

    let entries: Vec<ListItem> = MENU_ENTRIES
        .iter()
        .enumerate()
        .map(|(idx, (label, _))| {
            let is_selected = idx == app.menu_selected;
            let style = if is_selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let marker = if is_selected { "> " } else { "  " };
            ListItem::new(Line::from(Span::styled(
                format!("   {}{}", marker, label),
                style,
            )))
        })
        .collect();

    f.render_widget(List::new(entries), chunks[1]);
}
