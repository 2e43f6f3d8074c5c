//! Stub identity providers for tests and offline builds.

use crate::error::IdentityError;
use crate::identity::{Identity, IdentityFuture, IdentityProvider};

/// Resolves immediately with a fixed result.
#[derive(Clone, Debug)]
pub struct StaticIdentityProvider {
    result: Result<Identity, IdentityError>,
}

impl StaticIdentityProvider {
    pub fn signed_in(identity: Identity) -> Self {
        Self {
            result: Ok(identity),
        }
    }

    /// Always fails with [`IdentityError::Unauthenticated`].
    pub fn guest() -> Self {
        Self::failing(IdentityError::Unauthenticated)
    }

    pub fn failing(err: IdentityError) -> Self {
        Self { result: Err(err) }
    }

    /// Signed-in demo user.
    pub fn demo() -> Self {
        Self::signed_in(Identity {
            full_name: Some("Demo Admin".to_string()),
            email: Some("admin@example.com".to_string()),
            avatar_url: None,
        })
    }
}

impl IdentityProvider for StaticIdentityProvider {
    fn fetch_current_identity(&self) -> IdentityFuture<'_> {
        let result = self.result.clone();
        Box::pin(async move { result })
    }
}
