use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use losttrack_core::Item;

use crate::app::App;

/// Render the search view: query line on top, matches below
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Query input
            Constraint::Min(0),    // Results
        ])
        .split(area);

    let query = Paragraph::new(Line::from(vec![
        Span::raw(app.search.query.as_str()),
        Span::styled("_", Style::default().fg(Color::Green)), // Cursor
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Query ")
            .border_style(Style::default().fg(app.view.color())),
    );
    f.render_widget(query, chunks[0]);

    render_results(f, chunks[1], app);
}

fn render_results(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Results ")
        .border_style(Style::default().fg(Color::DarkGray));

    match &app.search.results {
        // No search has run yet
        None => {
            let guidance = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Type a query and press Enter",
                    Style::default().fg(Color::DarkGray),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "Matches name, description, and barcode",
                    Style::default().fg(Color::DarkGray),
                )),
            ])
            .block(block)
            .alignment(Alignment::Center);
            f.render_widget(guidance, area);
        }

        Some(items) if items.is_empty() => {
            let empty = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "No matching items",
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::BOLD),
                )),
            ])
            .block(block)
            .alignment(Alignment::Center);
            f.render_widget(empty, area);
        }

        Some(items) => {
            let title = format!(" Results ({}) ", items.len());
            let rows: Vec<ListItem> = items.iter().map(render_match).collect();
            let list = List::new(rows).block(block.title(title));
            f.render_widget(list, area);
        }
    }
}

/// Render one match as its labeled display record
fn render_match(item: &Item) -> ListItem<'_> {
    let mut spans = Vec::new();
    for (label, value) in item.display_fields() {
        if !spans.is_empty() {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            format!("{}: ", label),
            Style::default().fg(Color::DarkGray),
        ));
        spans.push(Span::raw(value.to_string()));
    }
    ListItem::new(Line::from(spans))
}
