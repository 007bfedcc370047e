//! smon Check Feed Viewer
//!
//! Browser frontend for the smon monitoring daemon, built with Leptos (WASM).
//!
//! Opens a WebSocket to the smon check stream, requests the current list of
//! check results with the `LIST` command, and renders them into the page.

use leptos::*;

mod app;
mod components;
mod config;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
