//! Sidebar navigation component.
//!
//! Renders the static menu in declared order, highlights the entries the
//! navigation model marks active, and hosts the collapse toggle.

use leptos::prelude::*;
use leptos_icons::Icon;
use pmshell_core::{CurrentLocation, NavEntry, NavigationModel, SidebarMode, page_url};

use super::shell::ShellState;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/shell/sidebar.module.css");

/// Collapsible side menu.
///
/// Width comes from [`SidebarMode::width_px`]; labels are hidden on the
/// icon rail and shown as hover titles instead.
#[component]
pub fn Sidebar(
    navigation: NavigationModel,
    location: Signal<CurrentLocation>,
    state: ShellState,
) -> impl IntoView {
    let mode = state.sidebar;
    let width = move || format!("{}px", mode.get().width_px());
    let entries = Memo::new(move |_| location.with(|loc| navigation.entries(loc)));

    let toggle = move |_: leptos::ev::MouseEvent| state.toggle_sidebar();
    let toggle_title = move || {
        if mode.get().is_collapsed() {
            "Expand menu"
        } else {
            "Collapse menu"
        }
    };

    view! {
        <aside class=css::sidebar style:width=width>
            <nav class=css::menu>
                {move || entries
                    .get()
                    .into_iter()
                    .map(|entry| view! { <SidebarItem entry=entry mode=mode /> })
                    .collect_view()}
            </nav>

            <button class=css::collapse on:click=toggle title=toggle_title>
                <Icon icon=ic::MENU />
            </button>
        </aside>
    }
}

/// One menu link.
#[component]
fn SidebarItem(entry: NavEntry<'static>, mode: RwSignal<SidebarMode>) -> impl IntoView {
    let item = entry.item;
    let class = if entry.active {
        css::itemActive
    } else {
        css::item
    };
    let title = move || mode.get().item_title(item.label).map(str::to_string);

    view! {
        <a
            class=class
            href=page_url(item.route_key)
            title=title
            aria-current=entry.active.then_some("page")
        >
            <span class=css::icon>
                <Icon icon=ic::glyph(item.glyph) />
            </span>
            <Show when=move || mode.get().show_labels()>
                <span class=css::label>{item.label}</span>
            </Show>
        </a>
    }
}
