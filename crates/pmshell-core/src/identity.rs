//! Session identity shown in the admin bar.

use std::future::Future;
use std::pin::Pin;

use serde::Deserialize;

use crate::error::IdentityError;

/// Fallback name when nobody is signed in.
pub const GUEST_NAME: &str = "Guest";

/// Display data of the signed-in user.
///
/// Every field is optional on the wire; unknown fields are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Identity {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
}

impl Identity {
    /// Parse an identity record from a JSON response body.
    pub fn from_json(body: &str) -> Result<Self, IdentityError> {
        Ok(serde_json::from_str(body)?)
    }

    /// Full name if set, otherwise email.
    pub fn display_name(&self) -> Option<&str> {
        non_empty(&self.full_name).or_else(|| non_empty(&self.email))
    }

    /// Avatar URL, only when non-empty.
    pub fn avatar(&self) -> Option<&str> {
        non_empty(&self.avatar_url)
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Identity slot of a mounted shell.
///
/// Starts [`Pending`](IdentityState::Pending) and resolves at most once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum IdentityState {
    /// Lookup not finished yet.
    #[default]
    Pending,
    /// Lookup succeeded.
    Known(Identity),
    /// Lookup failed; render as guest.
    Absent,
}

impl IdentityState {
    /// Apply a lookup result. Returns `false` (and leaves the state alone)
    /// if the slot was already resolved.
    pub fn resolve(&mut self, identity: Option<Identity>) -> bool {
        if !matches!(self, Self::Pending) {
            return false;
        }
        *self = match identity {
            Some(identity) => Self::Known(identity),
            None => Self::Absent,
        };
        true
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Known(identity) => Some(identity),
            _ => None,
        }
    }

    /// Name shown after "Howdy,".
    pub fn display_name(&self) -> &str {
        self.identity()
            .and_then(Identity::display_name)
            .unwrap_or(GUEST_NAME)
    }

    /// Admin bar greeting, e.g. `Howdy, Ada`.
    pub fn greeting(&self) -> String {
        format!("Howdy, {}", self.display_name())
    }

    pub fn avatar_url(&self) -> Option<&str> {
        self.identity().and_then(Identity::avatar)
    }
}

/// Boxed future returned by [`IdentityProvider`].
///
/// Not `Send`: browser futures live on the main thread.
pub type IdentityFuture<'a> = Pin<Box<dyn Future<Output = Result<Identity, IdentityError>> + 'a>>;

/// Source of the current session identity.
///
/// Injected into the shell so tests can substitute a stub.
pub trait IdentityProvider: Send + Sync {
    fn fetch_current_identity(&self) -> IdentityFuture<'_>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn known(json: &str) -> IdentityState {
        IdentityState::Known(Identity::from_json(json).unwrap())
    }

    #[test]
    fn test_greeting_prefers_full_name() {
        let state = known(r#"{"full_name": "Ada", "email": "ada@example.com"}"#);
        assert_eq!(state.greeting(), "Howdy, Ada");
    }

    #[test]
    fn test_greeting_falls_back_to_email() {
        assert_eq!(known(r#"{"email": "a@x.com"}"#).greeting(), "Howdy, a@x.com");
        assert_eq!(
            known(r#"{"full_name": "", "email": "a@x.com"}"#).greeting(),
            "Howdy, a@x.com"
        );
    }

    #[test]
    fn test_greeting_guest() {
        assert_eq!(IdentityState::Absent.greeting(), "Howdy, Guest");
        assert_eq!(IdentityState::Pending.greeting(), "Howdy, Guest");
        assert_eq!(known("{}").greeting(), "Howdy, Guest");
    }

    #[test]
    fn test_avatar_only_when_present_and_non_empty() {
        let with = known(r#"{"full_name": "Ada", "avatar_url": "https://x/a.png"}"#);
        assert_eq!(with.avatar_url(), Some("https://x/a.png"));

        assert_eq!(known(r#"{"full_name": "Ada", "avatar_url": ""}"#).avatar_url(), None);
        assert_eq!(known(r#"{"full_name": "Ada"}"#).avatar_url(), None);
        assert_eq!(IdentityState::Absent.avatar_url(), None);
        assert_eq!(IdentityState::Pending.avatar_url(), None);
    }

    #[test]
    fn test_resolve_only_once() {
        let mut state = IdentityState::default();
        assert!(!state.is_resolved());

        assert!(state.resolve(None));
        assert_eq!(state, IdentityState::Absent);

        let ada = Identity {
            full_name: Some("Ada".to_string()),
            ..Default::default()
        };
        assert!(!state.resolve(Some(ada)));
        assert_eq!(state, IdentityState::Absent);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let identity =
            Identity::from_json(r#"{"id": "u1", "role": "admin", "email": "a@x.com"}"#).unwrap();
        assert_eq!(identity.email.as_deref(), Some("a@x.com"));
    }

    #[test]
    fn test_malformed_body() {
        assert!(matches!(
            Identity::from_json("<html>"),
            Err(IdentityError::Malformed(_))
        ));
    }
}
