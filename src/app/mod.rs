//! TUI application module
//!
//! Contains the shell controller, chrome, drawer overlay, keyboard
//! mapping, content screens, and terminal management.

pub mod app;
pub mod chrome;
pub mod drawer;
pub mod keys;
pub mod screens;
pub mod tui;

pub use app::App;
pub use drawer::{Drawer, DrawerRow};
pub use keys::{key_to_action, Action};
pub use tui::{Tui, TuiEvent};
