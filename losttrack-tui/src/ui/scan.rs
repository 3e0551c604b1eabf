use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::ui::layout::Layout;

/// Render the scan-capture modal over the form, if open
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let Some(buffer) = &app.form.scan else {
        return;
    };

    let modal = Layout::centered(area, 46, 5);
    f.render_widget(Clear, modal);

    let content = vec![
        Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::Yellow)),
            Span::raw(buffer.as_str()),
            Span::styled("_", Style::default().fg(Color::Green)), // Cursor
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Scan or type, then press Enter",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Scan barcode ")
            .border_style(Style::default().fg(app.view.color())),
    );

    f.render_widget(paragraph, modal);
}
