pub mod app;
pub mod ui;
pub mod view;

// Re-export commonly used types
pub use app::App;
pub use ui::UI;
pub use view::{FormField, View};
