use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tui_textarea::TextArea;

use crate::app::App;
use crate::view::FormField;

/// Add-form panel. Name and barcode are plain input buffers owned by the
/// app; the free-text description gets a real textarea.
pub struct FormPanel<'a> {
    pub description: TextArea<'a>,
}

impl<'a> FormPanel<'a> {
    /// Create a new form panel
    pub fn new() -> Self {
        let mut description = TextArea::default();
        description.set_placeholder_text("What does the item look like?");
        description.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Description ")
                .border_style(Style::default().fg(Color::DarkGray)),
        );

        Self { description }
    }

    /// Render the form
    pub fn render(&mut self, f: &mut Frame, area: Rect, app: &App) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Name
                Constraint::Min(4),    // Description
                Constraint::Length(3), // Barcode
            ])
            .split(area);

        render_line_field(f, rows[0], app, FormField::Name, &app.form.name);
        self.render_description(f, rows[1], app);
        render_line_field(f, rows[2], app, FormField::Barcode, &app.form.barcode);
    }

    fn render_description(&mut self, f: &mut Frame, area: Rect, app: &App) {
        let focused = app.form.focus == FormField::Description && app.form.scan.is_none();
        let border_color = if focused {
            app.view.color()
        } else {
            Color::DarkGray
        };

        self.description.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", FormField::Description.label()))
                .border_style(Style::default().fg(border_color)),
        );

        if focused {
            self.description
                .set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
        } else {
            self.description.set_cursor_style(Style::default());
        }

        f.render_widget(&self.description, area);
    }

    /// Handle key input (only when the description field is focused)
    pub fn handle_input(&mut self, key: crossterm::event::KeyEvent) {
        self.description.input(key);
    }

    /// Get current description content
    pub fn content(&self) -> String {
        self.description.lines().join("\n")
    }

    /// Reset to an empty form
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

impl<'a> Default for FormPanel<'a> {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a single-line input field with a trailing cursor marker when
/// focused
fn render_line_field(f: &mut Frame, area: Rect, app: &App, field: FormField, value: &str) {
    let focused = app.form.focus == field && app.form.scan.is_none();
    let border_color = if focused {
        app.view.color()
    } else {
        Color::DarkGray
    };

    let mut spans = vec![Span::raw(value.to_string())];
    if focused {
        spans.push(Span::styled("_", Style::default().fg(Color::Green)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", field.label()))
            .border_style(Style::default().fg(border_color)),
    );

    f.render_widget(paragraph, area);
}
