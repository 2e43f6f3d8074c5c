//! Root application module.
//!
//! Contains the main App component and the AppContext definition.

use leptos::prelude::*;
use pmshell_core::{CurrentLocation, NavigationModel};

use crate::components::AppRouter;
use crate::config::navigation_model;
use crate::core::default_identity_provider;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree; read it with
/// `use_context::<AppContext>()`. Shell-local state (sidebar mode, session
/// identity) is deliberately not here: it lives and dies with each shell.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current page path, driven by the URL hash.
    pub location: RwSignal<CurrentLocation>,

    /// Sidebar menu and its active-item rule.
    pub navigation: NavigationModel,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            location: RwSignal::new(CurrentLocation::root()),
            navigation: navigation_model(),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the router, which mounts the shell
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    let provider = default_identity_provider();

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    min-height: 100vh;
                    padding: 2rem;
                    background: #f0f0f1;
                    color: #3c434a;
                    font-size: 13px;
                ">
                    <div class="wp-card" style="max-width: 600px; padding: 1.5rem;">
                        <h1 class="wp-heading">"Something went wrong"</h1>
                        <p>"An unexpected error occurred. Please try reloading the page."</p>
                        <ul style="color: #d63638; padding-left: 1.5rem;">
                            {move || errors.get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                            }
                        </ul>
                        <button
                            class="wp-btn"
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <AppRouter provider=provider />
        </ErrorBoundary>
    }
}
