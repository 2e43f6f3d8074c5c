//! WordPress-style admin shell for the project manager, built with Leptos.
//!
//! State logic lives in `pmshell-core`; this crate wires it to signals,
//! the URL hash and the DOM.

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod utils;

use leptos::prelude::*;
use wasm_bindgen::JsCast;

pub use app::{App, AppContext};
pub use components::Shell;

/// Install the panic hook and mount [`App`] into `#app`.
pub fn mount() {
    console_error_panic_hook::set_once();

    let root = document()
        .get_element_by_id("app")
        .expect("Failed to find #app element")
        .unchecked_into::<web_sys::HtmlElement>();

    mount_to(root, App).forget();
}
