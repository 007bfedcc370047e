//! Check Feed Component
//!
//! The `#checks` container all rendered records accumulate into.

use leptos::*;

use crate::components::CheckCard;
use crate::state::global::GlobalState;

/// Check feed container: record blocks interleaved with separators,
/// in arrival order
#[component]
pub fn CheckFeed() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div id="checks" class="checks">
            {move || {
                let checks = state.checks.get();

                if checks.is_empty() {
                    return view! {
                        <p class="text-gray-400 text-sm">"Waiting for checks..."</p>
                    }
                    .into_view();
                }

                checks
                    .into_iter()
                    .map(|record| {
                        view! {
                            <CheckCard record=record />
                            <div class="checksep"></div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
