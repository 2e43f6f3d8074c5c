//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

use pmshell_core::{MatchStrategy, NAV_ITEMS, NavigationModel};

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the admin bar.
pub const APP_NAME: &str = "WP Project Manager";

/// Letter drawn inside the round admin bar logo.
pub const APP_LOGO_LETTER: &str = "W";

// =============================================================================
// Session Configuration
// =============================================================================

/// Endpoint returning the signed-in user as JSON.
///
/// Override at build time with `PMSHELL_IDENTITY_URL`.
pub const IDENTITY_ENDPOINT: &str = match option_env!("PMSHELL_IDENTITY_URL") {
    Some(url) => url,
    None => "/api/auth/me",
};

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

// =============================================================================
// Navigation Configuration
// =============================================================================

/// Page shown when the URL has no route.
pub const DEFAULT_ROUTE: &str = "Dashboard";

/// Rule used to highlight the current sidebar entry.
pub const NAV_MATCH: MatchStrategy = MatchStrategy::FirstSegment;

/// Sidebar menu with the configured match rule.
pub const fn navigation_model() -> NavigationModel {
    NavigationModel::new(NAV_ITEMS, NAV_MATCH)
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Closest to the dashicons look (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
