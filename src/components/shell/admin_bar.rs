//! Admin bar component.
//!
//! Fixed dark strip across the top: brand, Dashboard shortcut, the "New"
//! quick-create menu, and the greeting with optional avatar.

use leptos::prelude::*;
use leptos_icons::Icon;
use pmshell_core::{IdentityState, QUICK_CREATE, page_url};

use crate::components::icons as ic;
use crate::config::{APP_LOGO_LETTER, APP_NAME, DEFAULT_ROUTE};

stylance::import_crate_style!(css, "src/components/shell/admin_bar.module.css");

/// Top bar. Renders `Howdy, Guest` until the identity lookup succeeds.
#[component]
pub fn AdminBar(identity: RwSignal<IdentityState>) -> impl IntoView {
    let greeting = Signal::derive(move || identity.with(IdentityState::greeting));
    let avatar = Signal::derive(move || identity.with(|s| s.avatar_url().map(str::to_string)));

    view! {
        <header class=css::bar>
            <div class=css::section>
                <div class=css::brand>
                    <span class=css::logo>{APP_LOGO_LETTER}</span>
                    <span>{APP_NAME}</span>
                </div>

                <nav class=css::links>
                    <a class=css::link href=page_url(DEFAULT_ROUTE)>
                        <Icon icon=ic::DASHBOARD />
                        "Dashboard"
                    </a>
                    <NewMenu />
                </nav>
            </div>

            <div class=css::account>
                <span class=css::howdy>{greeting}</span>
                {move || avatar.get().map(|url| view! {
                    <img class=css::avatar src=url alt="Avatar" />
                })}
            </div>
        </header>
    }
}

/// "New" dropdown. Opens on hover through CSS only.
#[component]
fn NewMenu() -> impl IntoView {
    view! {
        <div class=css::newMenu>
            <span class=css::link>
                <Icon icon=ic::PLUS />
                "New"
            </span>
            <div class=css::newMenuList>
                {QUICK_CREATE
                    .iter()
                    .map(|link| view! {
                        <a class=css::newMenuItem href=page_url(link.route_key)>{link.label}</a>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
