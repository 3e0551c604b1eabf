pub mod form;
pub mod hint_bar;
pub mod layout;
pub mod list;
pub mod menu;
pub mod scan;
pub mod search;
pub mod status_bar;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;

use crate::app::App;
use crate::view::{FormField, View};

pub use form::FormPanel;

/// Main UI renderer
pub struct UI<'a> {
    pub form: FormPanel<'a>,
}

impl<'a> UI<'a> {
    /// Create a new UI
    pub fn new() -> Self {
        Self {
            form: FormPanel::new(),
        }
    }

    /// Render the entire UI
    pub fn render(&mut self, f: &mut Frame, app: &App) {
        // Get main layout areas
        let (status_area, content_area, hint_area) = layout::Layout::main(f.area());

        status_bar::render(f, status_area, app);
        hint_bar::render(f, hint_area, app);

        match app.view {
            View::Menu => menu::render(f, content_area, app),
            View::Add => self.form.render(f, content_area, app),
            View::Search => search::render(f, content_area, app),
            View::List => list::render(f, content_area, app),
        }

        // Modal overlays draw last
        scan::render(f, content_area, app);
    }

    /// Handle input events (delegates to appropriate component).
    ///
    /// Only plain editing keys reach the description textarea; navigation
    /// and shortcut keys stay with the app.
    pub fn handle_input(&mut self, key: KeyEvent, app: &App) {
        let editing_description = app.view == View::Add
            && app.form.scan.is_none()
            && app.form.focus == FormField::Description;

        if !editing_description {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return;
        }
        if matches!(key.code, KeyCode::Tab | KeyCode::BackTab | KeyCode::Esc) {
            return;
        }

        self.form.handle_input(key);
    }
}

impl<'a> Default for UI<'a> {
    fn default() -> Self {
        Self::new()
    }
}
