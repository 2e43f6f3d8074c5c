//! Session identity lookup over HTTP.

use pmshell_core::{Identity, IdentityError, IdentityFuture, IdentityProvider};

use crate::config::IDENTITY_ENDPOINT;
use crate::utils::fetch_text;

/// Fetches `GET {endpoint}` and parses the body as an [`Identity`].
///
/// 401 and 403 responses count as "not logged in".
#[derive(Clone, Debug)]
pub struct HttpIdentityProvider {
    endpoint: String,
}

impl HttpIdentityProvider {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpIdentityProvider {
    fn default() -> Self {
        Self::new(IDENTITY_ENDPOINT)
    }
}

impl IdentityProvider for HttpIdentityProvider {
    fn fetch_current_identity(&self) -> IdentityFuture<'_> {
        Box::pin(async move {
            let body = fetch_text(&self.endpoint)
                .await
                .map_err(IdentityError::from)?;
            Identity::from_json(&body)
        })
    }
}
