//! UI components built with Leptos.
//!
//! - [`router`] - Hash routing (main entry point)
//! - [`shell`] - Admin bar, sidebar and content frame
//! - [`page`] - Placeholder page bodies
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod icons;
pub mod page;
pub mod router;
pub mod shell;

pub use router::{AppRouter, navigate_to};
pub use shell::Shell;
