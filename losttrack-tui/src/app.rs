use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

use losttrack_core::{Item, ItemDraft, ItemStore, StoreError};

use crate::view::{FormField, View};

/// Main menu entries, in display order
pub const MENU_ENTRIES: [(&str, View); 3] = [
    ("Add item", View::Add),
    ("Search items", View::Search),
    ("List items", View::List),
];

/// Add-form state (the description text lives in the UI layer's textarea)
#[derive(Debug, Default)]
pub struct FormState {
    pub name: String,
    pub barcode: String,
    pub focus: FormField,

    /// Input buffer of the scan-capture modal while it is open
    pub scan: Option<String>,
}

impl FormState {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Search view state
#[derive(Debug, Default)]
pub struct SearchState {
    pub query: String,

    /// `None` until the first search has run; distinguishes "type a query"
    /// from "no results"
    pub results: Option<Vec<Item>>,
}

/// List view state
#[derive(Debug, Default)]
pub struct ListState {
    pub items: Vec<Item>,
    pub selected: usize,
}

impl ListState {
    pub fn selected_item(&self) -> Option<&Item> {
        self.items.get(self.selected)
    }

    /// Move selection up
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Move selection down
    pub fn select_next(&mut self) {
        if self.selected < self.items.len().saturating_sub(1) {
            self.selected += 1;
        }
    }
}

/// Main application state
pub struct App {
    /// Current view
    pub view: View,

    /// Main menu selection
    pub menu_selected: usize,

    /// Add-form state
    pub form: FormState,

    /// Search view state
    pub search: SearchState,

    /// List view state
    pub list: ListState,

    /// Status message (shown in the hint bar)
    pub status_message: Option<String>,

    /// Total items in the store (status bar)
    pub item_total: i64,

    /// Should quit?
    pub should_quit: bool,

    /// Item store
    pub store: ItemStore,
}

impl App {
    /// Create a new App
    pub fn new(store: ItemStore) -> Self {
        Self {
            view: View::Menu,
            menu_selected: 0,
            form: FormState::default(),
            search: SearchState::default(),
            list: ListState::default(),
            status_message: None,
            item_total: 0,
            should_quit: false,
            store,
        }
    }

    /// Handle keyboard input
    pub async fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        // The scan modal swallows all input while open
        if self.view == View::Add && self.form.scan.is_some() {
            self.handle_scan_key(key);
            return Ok(());
        }

        match self.view {
            View::Menu => self.handle_menu_key(key).await?,
            View::Add => self.handle_form_key(key),
            View::Search => self.handle_search_key(key).await?,
            View::List => self.handle_list_key(key).await?,
        }
        Ok(())
    }

    /// Handle main menu keys
    async fn handle_menu_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            // Quit
            KeyCode::Char('q') => {
                self.should_quit = true;
            }

            KeyCode::Up | KeyCode::Char('k') => {
                if self.menu_selected > 0 {
                    self.menu_selected -= 1;
                }
            }

            KeyCode::Down | KeyCode::Char('j') => {
                if self.menu_selected < MENU_ENTRIES.len() - 1 {
                    self.menu_selected += 1;
                }
            }

            // Open the selected view
            KeyCode::Enter => {
                let (_, view) = MENU_ENTRIES[self.menu_selected];
                self.status_message = None;
                match view {
                    View::Add => {
                        self.form.clear();
                        self.view = View::Add;
                    }
                    View::Search => {
                        self.search = SearchState::default();
                        self.view = View::Search;
                    }
                    View::List => {
                        self.load_items().await;
                        self.view = View::List;
                    }
                    View::Menu => {}
                }
            }

            _ => {}
        }
        Ok(())
    }

    /// Handle add-form keys (description editing is consumed by the UI
    /// layer's textarea before this is called)
    fn handle_form_key(&mut self, key: KeyEvent) {
        match (key.code, key.modifiers) {
            // Back to menu, discarding the form
            (KeyCode::Esc, _) => {
                self.view = View::Menu;
                self.status_message = None;
            }

            (KeyCode::Tab, _) => {
                self.form.focus = self.form.focus.next();
            }

            (KeyCode::BackTab, _) => {
                self.form.focus = self.form.focus.prev();
            }

            // Open the scan-capture modal
            (KeyCode::Char('b'), KeyModifiers::CONTROL) => {
                self.form.scan = Some(String::new());
            }

            (KeyCode::Backspace, _) => match self.form.focus {
                FormField::Name => {
                    self.form.name.pop();
                }
                FormField::Barcode => {
                    self.form.barcode.pop();
                }
                FormField::Description => {}
            },

            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                match self.form.focus {
                    FormField::Name => self.form.name.push(c),
                    FormField::Barcode => self.form.barcode.push(c),
                    FormField::Description => {}
                }
            }

            _ => {}
        }
    }

    /// Handle scan-capture modal keys
    fn handle_scan_key(&mut self, key: KeyEvent) {
        match key.code {
            // Cancel without touching the barcode field
            KeyCode::Esc => {
                self.form.scan = None;
            }

            // Accept the captured string verbatim; an empty buffer keeps
            // the modal open
            KeyCode::Enter => {
                if let Some(buffer) = self.form.scan.take() {
                    if buffer.is_empty() {
                        self.form.scan = Some(buffer);
                    } else {
                        self.form.barcode = buffer;
                        self.form.focus = FormField::Barcode;
                    }
                }
            }

            KeyCode::Backspace => {
                if let Some(buffer) = &mut self.form.scan {
                    buffer.pop();
                }
            }

            KeyCode::Char(c) => {
                if let Some(buffer) = &mut self.form.scan {
                    buffer.push(c);
                }
            }

            _ => {}
        }
    }

    /// Handle search view keys
    async fn handle_search_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Esc => {
                self.view = View::Menu;
                self.status_message = None;
            }

            KeyCode::Enter => {
                self.run_search().await;
            }

            KeyCode::Backspace => {
                self.search.query.pop();
            }

            KeyCode::Char(c) => {
                self.search.query.push(c);
            }

            _ => {}
        }
        Ok(())
    }

    /// Handle list view keys
    async fn handle_list_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Esc => {
                self.view = View::Menu;
                self.status_message = None;
            }

            KeyCode::Up | KeyCode::Char('k') => {
                self.list.select_previous();
            }

            KeyCode::Down | KeyCode::Char('j') => {
                self.list.select_next();
            }

            // Reload
            KeyCode::Char('r') => {
                self.load_items().await;
                self.status_message = Some("Reloaded".to_string());
            }

            // Delete the selected row by its barcode
            KeyCode::Char('d') => {
                self.delete_selected().await;
            }

            _ => {}
        }
        Ok(())
    }

    /// Validate and submit the add form.
    ///
    /// Returns `true` when the item was stored (the caller then clears the
    /// description textarea). On a duplicate barcode the form stays open
    /// with all entered data intact.
    pub async fn submit_form(&mut self, description: &str) -> bool {
        let draft = match ItemDraft::new(&self.form.name, description, &self.form.barcode) {
            Ok(draft) => draft,
            Err(err) => {
                self.status_message = Some(err.to_string());
                return false;
            }
        };

        match self.store.add(&draft).await {
            Ok(item) => {
                self.status_message = Some(format!("Added {}", item));
                self.item_total += 1;
                self.form.clear();
                self.view = View::Menu;
                true
            }
            Err(err @ StoreError::DuplicateBarcode { .. }) => {
                self.status_message = Some(err.to_string());
                false
            }
            Err(err) => {
                self.status_message = Some(format!("Add failed: {}", err));
                false
            }
        }
    }

    /// Run the current search query
    async fn run_search(&mut self) {
        match self.store.search(&self.search.query).await {
            Ok(items) => {
                self.status_message = None;
                self.search.results = Some(items);
            }
            Err(err) => {
                self.status_message = Some(format!("Search failed: {}", err));
            }
        }
    }

    /// Load all items into the list view, clamping the selection
    async fn load_items(&mut self) {
        match self.store.list_all().await {
            Ok(items) => {
                self.item_total = items.len() as i64;
                self.list.selected = self
                    .list
                    .selected
                    .min(items.len().saturating_sub(1));
                self.list.items = items;
            }
            Err(err) => {
                self.status_message = Some(format!("Load failed: {}", err));
            }
        }
    }

    /// Delete the selected list row via its barcode and reload
    async fn delete_selected(&mut self) {
        let Some(item) = self.list.selected_item() else {
            self.status_message = Some("Nothing to delete".to_string());
            return;
        };
        let barcode = item.barcode.clone();

        match self.store.delete_by_barcode(&barcode).await {
            Ok(removed) => {
                self.status_message =
                    Some(format!("Removed {} item(s) with barcode '{}'", removed, barcode));
                self.load_items().await;
            }
            Err(err) => {
                self.status_message = Some(format!("Delete failed: {}", err));
            }
        }
    }

    /// Refresh the cached item count (status bar)
    pub async fn refresh_count(&mut self) -> Result<()> {
        self.item_total = self.store.count().await?;
        Ok(())
    }

    /// Poll for events with timeout
    pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }
}
