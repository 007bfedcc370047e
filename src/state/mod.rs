//! State Management
//!
//! Global application state, feed frame handling, and the WebSocket
//! connection to the smon check stream.

pub mod feed;
pub mod global;
pub mod websocket;

pub use feed::{handle_frame, FeedPhase, FrameOutcome};
pub use global::{provide_global_state, CheckRecord, ConnState, GlobalState};
pub use websocket::init_stream;
