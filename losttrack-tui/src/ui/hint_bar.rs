use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::view::View;

/// Render the hint bar (bottom bar)
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    // A status message wins over keybind hints
    let content = if let Some(ref msg) = app.status_message {
        Line::from(Span::styled(
            msg.as_str(),
            Style::default().fg(Color::Yellow),
        ))
    } else {
        let hints = if app.view == View::Add && app.form.scan.is_some() {
            "Enter: accept | Esc: cancel"
        } else {
            match app.view {
                View::Menu => "Up/Down: select | Enter: open | q: quit",
                View::Add => {
                    "Tab: next field | Ctrl-b: scan barcode | Ctrl-s: save | Esc: back"
                }
                View::Search => "type to edit query | Enter: search | Esc: back",
                View::List => "Up/Down: select | d: delete | r: reload | Esc: back",
            }
        };

        Line::from(Span::styled(hints, Style::default().fg(Color::DarkGray)))
    };

    let paragraph = Paragraph::new(content);
    f.render_widget(paragraph, area);
}
