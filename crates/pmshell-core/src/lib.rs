//! Target-independent state logic for the project-manager admin shell.
//!
//! Everything here is plain Rust with no browser bindings, so it can be
//! unit-tested on the host. The Leptos UI in the root crate wires these
//! types to signals and DOM events.
//!
//! - [`identity`] - Session identity model and the [`IdentityProvider`] seam
//! - [`session`] - One-shot identity loader with cancellation
//! - [`navigation`] - Static sidebar menu and active-item derivation
//! - [`route`] - Current location parsing and page URL resolution
//! - [`sidebar`] - Expanded/collapsed sidebar state machine
//! - [`quick_create`] - Entries of the "New" admin bar menu
//! - [`error`] - Error types

pub mod error;
pub mod identity;
#[cfg(feature = "mock")]
pub mod mock;
pub mod navigation;
pub mod quick_create;
pub mod route;
pub mod session;
pub mod sidebar;

pub use error::{FetchError, IdentityError};
pub use identity::{Identity, IdentityFuture, IdentityProvider, IdentityState};
pub use navigation::{Glyph, MatchStrategy, NAV_ITEMS, NavEntry, NavigationItem, NavigationModel};
pub use quick_create::{QUICK_CREATE, QuickCreateLink};
pub use route::{CurrentLocation, page_url};
pub use session::{CancellationToken, LoadOutcome, SessionLoader};
pub use sidebar::SidebarMode;
