//! Terminal user interface: the searchable picker and its detail view

pub mod detail;
pub mod event_handler;
pub mod interactive;
pub mod loading_indicator;
pub mod picker;
pub mod render;
pub mod state;
pub mod terminal_manager;

pub use detail::detail_lines;
pub use event_handler::{EventResult, handle_key_event};
pub use interactive::run_interactive_ui;
pub use loading_indicator::LoadingIndicator;
pub use picker::{UserPicker, matches_query};
pub use render::{LineStyle, ScreenLine, screen_lines};
pub use state::LoadState;
pub use terminal_manager::{TerminalConfig, TerminalManager};
