//! Placeholder page bodies rendered inside the shell.
//!
//! Real pages are supplied by other crates; these keep the binary usable
//! on its own and show which section is selected.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::router::navigate_to;
use crate::config::DEFAULT_ROUTE;

/// Page for the current location.
#[component]
pub fn Page() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let section = Memo::new(move |_| ctx.location.with(|loc| ctx.navigation.find_active(loc)));
    let path = Signal::derive(move || ctx.location.with(|loc| loc.path().to_string()));

    move || match section.get() {
        Some(item) => view! {
            <h1 class="wp-heading">{item.label}</h1>
            <div class="wp-card" style="padding: 12px 16px;">
                <p>{format!("{} content goes here.", item.label)}</p>
                <p style="color: #646970;">{path}</p>
            </div>
        }
        .into_any(),
        None => view! {
            <h1 class="wp-heading">"Page not found"</h1>
            <div class="wp-card" style="padding: 12px 16px;">
                <p>{move || format!("Nothing is registered at {}.", path.get())}</p>
                <button class="wp-btn" on:click=move |_| navigate_to(DEFAULT_ROUTE)>
                    "Go to Dashboard"
                </button>
            </div>
        }
        .into_any(),
    }
}
