//! Browser utilities.
//!
//! Provides:
//! - [`dom`] - Window and URL hash helpers
//! - [`fetch_text`] - Network fetching with timeout

pub mod dom;
mod fetch;

pub use fetch::fetch_text;
