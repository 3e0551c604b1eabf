/// Top-level views of the application
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    /// Main menu (composition root's home view)
    Menu,

    /// Add-item form
    Add,

    /// Free-text search
    Search,

    /// Tabular list of all items
    List,
}

impl View {
    /// Get display name for status bar
    pub fn display_name(&self) -> &'static str {
        match self {
            View::Menu => "MENU",
            View::Add => "ADD",
            View::Search => "SEARCH",
            View::List => "LIST",
        }
    }

    /// Get color for status bar (in ratatui Color enum)
    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            View::Menu => Color::Cyan,
            View::Add => Color::Green,
            View::Search => Color::Yellow,
            View::List => Color::Magenta,
        }
    }
}

/// Which form field has focus
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Description,
    Barcode,
}

impl FormField {
    /// Cycle forward through the fields
    pub fn next(&self) -> Self {
        match self {
            FormField::Name => FormField::Description,
            FormField::Description => FormField::Barcode,
            FormField::Barcode => FormField::Name,
        }
    }

    /// Cycle backward through the fields
    pub fn prev(&self) -> Self {
        match self {
            FormField::Name => FormField::Barcode,
            FormField::Description => FormField::Name,
            FormField::Barcode => FormField::Description,
        }
    }

    /// Field label shown on the form
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Description => "Description",
            FormField::Barcode => "Barcode",
        }
    }
}
