//! One-shot identity loading for a mounted shell.
//!
//! The shell creates a [`SessionLoader`] on mount, cancels its token on
//! unmount, and applies the [`LoadOutcome`] only if it is not
//! [`Abandoned`](LoadOutcome::Abandoned).

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::IdentityError;
use crate::identity::{Identity, IdentityProvider, IdentityState};

/// Shared abandon flag.
///
/// `Send + Sync` so it can be moved into cleanup hooks.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Result of a finished load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(Identity),
    Failed(IdentityError),
    /// The owning shell went away before the lookup finished.
    Abandoned,
}

impl LoadOutcome {
    /// Write this outcome into an identity slot.
    ///
    /// Returns `true` if the slot changed.
    pub fn apply(self, state: &mut IdentityState) -> bool {
        match self {
            Self::Loaded(identity) => state.resolve(Some(identity)),
            Self::Failed(_) => state.resolve(None),
            Self::Abandoned => false,
        }
    }
}

/// Performs exactly one identity lookup.
#[derive(Debug, Default)]
pub struct SessionLoader {
    token: CancellationToken,
}

impl SessionLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle used to abandon the load from outside.
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Run the lookup. Consumes the loader so it cannot fire twice.
    ///
    /// The token is checked after the provider resolves; a late result is
    /// dropped.
    pub async fn load<P>(self, provider: &P) -> LoadOutcome
    where
        P: IdentityProvider + ?Sized,
    {
        if self.token.is_cancelled() {
            return LoadOutcome::Abandoned;
        }

        let result = provider.fetch_current_identity().await;

        if self.token.is_cancelled() {
            return LoadOutcome::Abandoned;
        }

        match result {
            Ok(identity) => LoadOutcome::Loaded(identity),
            Err(err) => LoadOutcome::Failed(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;

    use super::*;
    use crate::identity::IdentityFuture;

    /// Counts calls and optionally cancels a token mid-flight.
    struct CountingProvider {
        calls: AtomicUsize,
        result: Result<Identity, IdentityError>,
        cancel_during_fetch: Option<CancellationToken>,
    }

    impl CountingProvider {
        fn new(result: Result<Identity, IdentityError>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                result,
                cancel_during_fetch: None,
            }
        }
    }

    impl IdentityProvider for CountingProvider {
        fn fetch_current_identity(&self) -> IdentityFuture<'_> {
            Box::pin(async move {
                self.calls.fetch_add(1, Ordering::Relaxed);
                if let Some(token) = &self.cancel_during_fetch {
                    token.cancel();
                }
                self.result.clone()
            })
        }
    }

    fn ada() -> Identity {
        Identity {
            full_name: Some("Ada".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_load_success() {
        let provider = CountingProvider::new(Ok(ada()));
        let outcome = SessionLoader::new().load(&provider).await;

        assert_eq!(outcome, LoadOutcome::Loaded(ada()));
        assert_eq!(provider.calls.load(Ordering::Relaxed), 1);

        let mut state = IdentityState::default();
        assert!(outcome.apply(&mut state));
        assert_eq!(state.greeting(), "Howdy, Ada");
    }

    #[tokio::test]
    async fn test_load_failure_degrades_to_guest() {
        let provider = CountingProvider::new(Err(IdentityError::Unauthenticated));
        let outcome = SessionLoader::new().load(&provider).await;
        assert_eq!(outcome, LoadOutcome::Failed(IdentityError::Unauthenticated));

        let mut state = IdentityState::default();
        assert!(outcome.apply(&mut state));
        assert_eq!(state, IdentityState::Absent);
        assert_eq!(state.greeting(), "Howdy, Guest");
    }

    #[tokio::test]
    async fn test_cancel_before_start_skips_fetch() {
        let provider = CountingProvider::new(Ok(ada()));
        let loader = SessionLoader::new();
        loader.token().cancel();

        assert_eq!(loader.load(&provider).await, LoadOutcome::Abandoned);
        assert_eq!(provider.calls.load(Ordering::Relaxed), 0);
    }

    #[tokio::test]
    async fn test_late_resolution_is_dropped() {
        let loader = SessionLoader::new();
        let mut provider = CountingProvider::new(Ok(ada()));
        provider.cancel_during_fetch = Some(loader.token());

        let outcome = loader.load(&provider).await;
        assert_eq!(outcome, LoadOutcome::Abandoned);
        assert_eq!(provider.calls.load(Ordering::Relaxed), 1);

        let mut state = IdentityState::default();
        assert!(!outcome.apply(&mut state));
        assert_eq!(state, IdentityState::Pending);
    }

    #[tokio::test]
    async fn test_works_through_trait_object() {
        let provider: Arc<dyn IdentityProvider> = Arc::new(CountingProvider::new(Ok(ada())));
        let outcome = SessionLoader::new().load(provider.as_ref()).await;
        assert_eq!(outcome, LoadOutcome::Loaded(ada()));
    }
}
