//! Browser-side service implementations.
//!
//! - [`HttpIdentityProvider`] - Looks up the session identity over HTTP

mod identity;

use std::sync::Arc;

use pmshell_core::IdentityProvider;

pub use identity::HttpIdentityProvider;

/// Identity provider used by the application root.
///
/// With the `mock` feature the shell shows a fixed demo user and makes no
/// network requests.
pub fn default_identity_provider() -> Arc<dyn IdentityProvider> {
    #[cfg(feature = "mock")]
    {
        Arc::new(pmshell_core::mock::StaticIdentityProvider::demo())
    }
    #[cfg(not(feature = "mock"))]
    {
        Arc::new(HttpIdentityProvider::default())
    }
}
