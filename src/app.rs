//! App Root Component
//!
//! Main application component with global providers and layout.

use leptos::*;

use crate::components::CheckFeed;
use crate::config;
use crate::state::global::{provide_global_state, ConnState, GlobalState};
use crate::state::websocket::init_stream;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    // Open the check-stream connection
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    init_stream(state.clone(), &config::get_stream_url());

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            // Header
            <header class="bg-gray-800 border-b border-gray-700">
                <div class="container mx-auto px-4">
                    <div class="flex items-center justify-between h-16">
                        <div class="flex items-center space-x-3">
                            <span class="text-2xl">"🩺"</span>
                            <span class="text-xl font-bold text-white">"smon"</span>
                        </div>
                        <span class="text-sm text-gray-400">"server checks"</span>
                    </div>
                </div>
            </header>

            // Main content area
            <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                <CheckFeed />
            </main>

            // Footer with connection status
            <Footer />
        </div>
    }
}

/// Footer component showing connection status
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                // Stream status
                <div class="flex items-center space-x-2">
                    {move || {
                        match state.conn.get() {
                            ConnState::Open => view! {
                                <span class="flex items-center space-x-1 text-green-400">
                                    <span class="w-2 h-2 bg-green-400 rounded-full pulse" />
                                    <span>"Connected"</span>
                                </span>
                            }.into_view(),
                            ConnState::Connecting => view! {
                                <span class="flex items-center space-x-1 text-gray-400">
                                    <span class="w-2 h-2 bg-gray-400 rounded-full" />
                                    <span>"Connecting..."</span>
                                </span>
                            }.into_view(),
                            ConnState::Closed | ConnState::Failed => view! {
                                <span class="flex items-center space-x-1 text-red-400">
                                    <span class="w-2 h-2 bg-red-400 rounded-full" />
                                    <span>"Disconnected"</span>
                                </span>
                            }.into_view(),
                        }
                    }}
                </div>

                // Last frame time
                <div class="text-gray-400">
                    {move || {
                        state.last_frame.get()
                            .and_then(|ts| chrono::DateTime::from_timestamp_millis(ts))
                            .map(|dt| format!("Last update: {}", dt.format("%H:%M:%S")))
                            .unwrap_or_else(|| "No updates yet".to_string())
                    }}
                </div>
            </div>
        </footer>
    }
}
