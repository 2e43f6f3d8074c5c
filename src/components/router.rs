//! Application router component.
//!
//! Uses native hashchange events instead of leptos_router for true hash
//! routing. The URL hash is the source of truth for [`CurrentLocation`];
//! the shell stays mounted across navigations and only the page inside it
//! changes.

use std::sync::Arc;

use leptos::prelude::*;
use pmshell_core::{CurrentLocation, IdentityProvider, page_url};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::AppContext;
use crate::components::page::Page;
use crate::components::shell::Shell;
use crate::config::DEFAULT_ROUTE;
use crate::utils::dom;

/// Navigate to the page for `route_key` (adds a history entry).
pub fn navigate_to(route_key: &str) {
    dom::set_hash(&page_url(route_key));
}

/// Location parsed from the browser URL.
fn current_location() -> CurrentLocation {
    CurrentLocation::from_hash(&dom::get_hash())
}

/// Swap an empty location for the default page.
///
/// Returns the location to show and, when redirecting, the hash the URL
/// should be rewritten to.
fn redirect_root(location: CurrentLocation) -> (CurrentLocation, Option<String>) {
    if !location.is_root() {
        return (location, None);
    }
    let target = page_url(DEFAULT_ROUTE);
    (CurrentLocation::from_hash(&target), Some(target))
}

/// Current location with `#/` redirected (via `replaceState`) to the
/// default page.
fn resolve_location() -> CurrentLocation {
    let (location, redirect) = redirect_root(current_location());
    if let Some(hash) = redirect {
        dom::replace_hash(&hash);
    }
    location
}

/// Main application router.
///
/// - `#/` or no hash → redirected to the default page
/// - `#/Key/...` → page for `Key` inside the shell
#[component]
pub fn AppRouter(provider: Arc<dyn IdentityProvider>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    ctx.location.set(resolve_location());

    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            ctx.location.set(resolve_location());
        }) as Box<dyn Fn()>);

        if let Some(window) = dom::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    view! {
        <Shell provider=provider location=ctx.location navigation=ctx.navigation>
            <Page />
        </Shell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_redirects_to_default_page() {
        for hash in ["", "#", "#/", "#/?x=1", "#?x"] {
            let (location, redirect) = redirect_root(CurrentLocation::from_hash(hash));
            assert_eq!(location.first_segment(), Some(DEFAULT_ROUTE), "hash {:?}", hash);
            assert_eq!(redirect.as_deref(), Some("#/Dashboard"), "hash {:?}", hash);
        }
    }

    #[test]
    fn test_other_locations_pass_through() {
        let (location, redirect) = redirect_root(CurrentLocation::from_hash("#/Reports/Q1"));
        assert_eq!(location.path(), "/Reports/Q1");
        assert_eq!(redirect, None);
    }
}
