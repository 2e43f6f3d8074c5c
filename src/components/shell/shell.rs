//! Main shell component.
//!
//! Container that owns the sidebar mode and the session identity for one
//! mount, kicks off the identity lookup, and lays out admin bar, sidebar
//! and content pane.

use std::sync::Arc;

use leptos::prelude::*;
use pmshell_core::{
    CurrentLocation, IdentityProvider, IdentityState, LoadOutcome, NavigationModel, SessionLoader,
    SidebarMode,
};
use wasm_bindgen_futures::spawn_local;

use super::admin_bar::AdminBar;
use super::sidebar::Sidebar;

stylance::import_crate_style!(css, "src/components/shell/shell.module.css");

// ============================================================================
// ShellState
// ============================================================================

/// Per-mount shell state.
///
/// `Copy` because both fields are signals. Created fresh on every mount, so
/// the sidebar always starts expanded and the identity starts pending.
#[derive(Clone, Copy)]
pub struct ShellState {
    /// Sidebar collapse toggle.
    pub sidebar: RwSignal<SidebarMode>,
    /// Session identity shown in the admin bar.
    pub identity: RwSignal<IdentityState>,
}

impl ShellState {
    pub fn new() -> Self {
        Self {
            sidebar: RwSignal::new(SidebarMode::default()),
            identity: RwSignal::new(IdentityState::default()),
        }
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar.update(SidebarMode::toggle);
    }
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Session Loading
// ============================================================================

/// Fire the one identity lookup for this mount.
///
/// The loader's token is cancelled when the owning reactive scope is
/// cleaned up, so a lookup that finishes after unmount is dropped.
pub fn start_session_loader(
    provider: Arc<dyn IdentityProvider>,
    identity: RwSignal<IdentityState>,
) {
    let loader = SessionLoader::new();
    let token = loader.token();
    on_cleanup(move || token.cancel());

    spawn_local(async move {
        let outcome = loader.load(provider.as_ref()).await;

        match &outcome {
            LoadOutcome::Abandoned => {
                web_sys::console::log_1(&"Identity lookup abandoned".into());
                return;
            }
            LoadOutcome::Failed(err) => {
                web_sys::console::error_2(&"Not logged in".into(), &err.to_string().into());
            }
            LoadOutcome::Loaded(_) => {}
        }

        identity.try_update(move |state| outcome.apply(state));
    });
}

// ============================================================================
// Shell Component
// ============================================================================

/// Admin shell wrapping every page.
///
/// # Props
/// - `provider`: Source of the session identity, looked up once on mount
/// - `location`: Current page path from the router
/// - `navigation`: Sidebar menu and its active-item rule
/// - `children`: Page body, rendered unmodified in the content pane
#[component]
pub fn Shell(
    provider: Arc<dyn IdentityProvider>,
    #[prop(into)] location: Signal<CurrentLocation>,
    #[prop(optional)] navigation: NavigationModel,
    children: Children,
) -> impl IntoView {
    let state = ShellState::new();
    start_session_loader(provider, state.identity);

    let content_offset = move || format!("{}px", state.sidebar.get().content_offset_px());

    view! {
        <div class=css::shell>
            <AdminBar identity=state.identity />

            <div class=css::body>
                <Sidebar navigation=navigation location=location state=state />

                <main class=css::content style:margin-left=content_offset>
                    <div class=css::inner>{children()}</div>
                </main>
            </div>
        </div>
    }
}
