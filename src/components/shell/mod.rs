//! Persistent application chrome.
//!
//! - [`Shell`] - Owns per-mount state and lays out the pieces below
//! - [`AdminBar`] - Top bar with brand, "New" menu and greeting
//! - [`Sidebar`] - Collapsible navigation menu

mod admin_bar;
#[allow(clippy::module_inception)]
mod shell;
mod sidebar;

pub use admin_bar::AdminBar;
pub use shell::{Shell, ShellState, start_session_loader};
pub use sidebar::Sidebar;
