//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

use super::feed::FeedPhase;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// All check records rendered so far, in arrival order.
    /// Append-only: new frames extend the list, nothing is cleared.
    pub checks: RwSignal<Vec<CheckRecord>>,
    /// WebSocket connection status
    pub conn: RwSignal<ConnState>,
    /// Where the feed is in its request/render cycle
    pub phase: RwSignal<FeedPhase>,
    /// Timestamp of the last rendered frame (ms since epoch)
    pub last_frame: RwSignal<Option<i64>>,
}

/// A single check result as reported by the smon daemon.
///
/// The wire format is a positional JSON array,
/// `[name, timestamp, [status, output]]`; serde bridges it into named
/// fields. `timestamp` is passed through verbatim, whatever format the
/// server used. `status` is carried but does not vary the rendering.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(from = "CheckRecordWire")]
pub struct CheckRecord {
    pub name: String,
    pub timestamp: String,
    pub status: String,
    pub output: String,
}

type CheckRecordWire = (String, String, (String, String));

impl From<CheckRecordWire> for CheckRecord {
    fn from((name, timestamp, (status, output)): CheckRecordWire) -> Self {
        Self {
            name,
            timestamp,
            status,
            output,
        }
    }
}

/// Lifecycle of the WebSocket connection
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnState {
    Connecting,
    Open,
    Closed,
    Failed,
}

impl GlobalState {
    pub fn new() -> Self {
        Self {
            checks: create_rw_signal(Vec::new()),
            conn: create_rw_signal(ConnState::Connecting),
            phase: create_rw_signal(FeedPhase::AwaitingOpen),
            last_frame: create_rw_signal(None),
        }
    }

    /// Append a batch of records to the rendered feed, preserving order
    pub fn append_checks(&self, records: Vec<CheckRecord>) {
        self.checks.update(|checks| checks.extend(records));
    }
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    provide_context(GlobalState::new());
}
