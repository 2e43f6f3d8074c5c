//! End-to-end shell state flow against stub providers.

use pmshell_core::mock::StaticIdentityProvider;
use pmshell_core::{
    CurrentLocation, FetchError, Identity, IdentityError, IdentityState, LoadOutcome,
    NavigationModel, SessionLoader, SidebarMode,
};

async fn mount(provider: &StaticIdentityProvider) -> IdentityState {
    let mut state = IdentityState::default();
    SessionLoader::new().load(provider).await.apply(&mut state);
    state
}

#[tokio::test]
async fn signed_in_user_with_avatar() {
    let provider = StaticIdentityProvider::signed_in(Identity {
        full_name: Some("Ada".to_string()),
        email: Some("ada@example.com".to_string()),
        avatar_url: Some("https://cdn.example.com/ada.png".to_string()),
    });

    let state = mount(&provider).await;
    assert_eq!(state.greeting(), "Howdy, Ada");
    assert_eq!(state.avatar_url(), Some("https://cdn.example.com/ada.png"));
}

#[tokio::test]
async fn email_only_user() {
    let provider = StaticIdentityProvider::signed_in(Identity {
        email: Some("a@x.com".to_string()),
        ..Default::default()
    });

    let state = mount(&provider).await;
    assert_eq!(state.greeting(), "Howdy, a@x.com");
    assert_eq!(state.avatar_url(), None);
}

#[tokio::test]
async fn guest_on_any_failure() {
    for err in [
        IdentityError::Unauthenticated,
        IdentityError::Fetch(FetchError::Timeout),
        IdentityError::Malformed("expected value".to_string()),
    ] {
        let state = mount(&StaticIdentityProvider::failing(err)).await;
        assert_eq!(state, IdentityState::Absent);
        assert_eq!(state.greeting(), "Howdy, Guest");
    }
}

#[tokio::test]
async fn unmounted_shell_keeps_pending_state() {
    let loader = SessionLoader::new();
    let token = loader.token();
    token.cancel();

    let outcome = loader.load(&StaticIdentityProvider::demo()).await;
    assert_eq!(outcome, LoadOutcome::Abandoned);

    let mut state = IdentityState::default();
    outcome.apply(&mut state);
    assert_eq!(state, IdentityState::Pending);
}

#[tokio::test]
async fn navigation_and_sidebar_are_independent_of_identity() {
    let state = mount(&StaticIdentityProvider::guest()).await;
    let model = NavigationModel::default();
    let location = CurrentLocation::from_hash("#/Kanban");

    let active: Vec<_> = model
        .entries(&location)
        .into_iter()
        .filter(|e| e.active)
        .map(|e| e.item.label)
        .collect();
    assert_eq!(active, vec!["Kanban Board"]);

    let mode = SidebarMode::default().toggled();
    assert!(mode.is_collapsed());
    assert_eq!(state.greeting(), "Howdy, Guest");
}
