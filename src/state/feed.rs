//! Feed Frame Handling
//!
//! The request/render cycle for the check stream, kept free of browser
//! types so it can be tested natively. The WebSocket glue in
//! [`super::websocket`] feeds frames in and injects the outbound sender.

use leptos::*;

use super::global::{CheckRecord, GlobalState};

/// The only outbound protocol message
pub const LIST_COMMAND: &str = "LIST";

/// Where the feed is in its one-shot request/render cycle.
///
/// `Stalled` reproduces the original client's behavior of swapping its
/// message handler for a logging stub after the first rendered frame:
/// later frames are ignored and no further `LIST` is requested. Kept
/// bug-compatible deliberately; see DESIGN.md.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedPhase {
    AwaitingOpen,
    Active,
    Stalled,
}

/// What [`handle_frame`] did with an inbound frame
#[derive(Debug)]
pub enum FrameOutcome {
    /// Frame parsed and rendered; `appended` records were added to the feed
    Rendered { appended: usize },
    /// Feed is stalled, frame ignored
    Stalled,
    /// Frame was not valid JSON for a check list; nothing rendered, no resend
    Rejected(serde_json::Error),
}

/// Parse one inbound frame body as a list of check records
pub fn parse_check_list(raw: &str) -> Result<Vec<CheckRecord>, serde_json::Error> {
    serde_json::from_str(raw)
}

/// The connection became usable: request the initial list
pub fn on_open(state: &GlobalState, mut send: impl FnMut(&str)) {
    send(LIST_COMMAND);
    state.phase.set(FeedPhase::Active);
}

/// Handle one inbound text frame.
///
/// While active: parse, append to the rendered feed, request the next
/// update, then stall. While stalled: do nothing. A parse failure aborts
/// the frame without a resend.
pub fn handle_frame(
    raw: &str,
    state: &GlobalState,
    mut send: impl FnMut(&str),
) -> FrameOutcome {
    if state.phase.get_untracked() == FeedPhase::Stalled {
        return FrameOutcome::Stalled;
    }

    match parse_check_list(raw) {
        Ok(records) => {
            let appended = records.len();
            state.append_checks(records);
            send(LIST_COMMAND);
            state.phase.set(FeedPhase::Stalled);
            FrameOutcome::Rendered { appended }
        }
        Err(e) => FrameOutcome::Rejected(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::create_runtime;

    fn with_state(f: impl FnOnce(GlobalState)) {
        let runtime = create_runtime();
        f(GlobalState::new());
        runtime.dispose();
    }

    #[test]
    fn open_sends_exactly_one_list_request() {
        with_state(|state| {
            let mut sent = Vec::new();
            on_open(&state, |cmd| sent.push(cmd.to_string()));
            assert_eq!(sent, ["LIST"]);
            assert_eq!(state.phase.get_untracked(), FeedPhase::Active);
        });
    }

    #[test]
    fn first_frame_renders_and_requests_next() {
        with_state(|state| {
            state.phase.set(FeedPhase::Active);
            let mut sent = Vec::new();
            let outcome = handle_frame(
                r#"[["build", "12:00", ["ok", "pass"]]]"#,
                &state,
                |cmd| sent.push(cmd.to_string()),
            );

            assert!(matches!(outcome, FrameOutcome::Rendered { appended: 1 }));
            assert_eq!(sent, ["LIST"]);
            assert_eq!(state.phase.get_untracked(), FeedPhase::Stalled);

            let checks = state.checks.get_untracked();
            assert_eq!(checks.len(), 1);
            assert_eq!(checks[0].name, "build");
            assert_eq!(checks[0].timestamp, "12:00");
            assert_eq!(checks[0].output, "pass");
        });
    }

    #[test]
    fn second_frame_is_ignored() {
        with_state(|state| {
            state.phase.set(FeedPhase::Active);
            let mut sent = Vec::new();
            handle_frame(r#"[["build", "12:00", ["ok", "pass"]]]"#, &state, |cmd| {
                sent.push(cmd.to_string())
            });

            let outcome = handle_frame(
                r#"[["build", "12:05", ["ok", "pass"]]]"#,
                &state,
                |cmd| sent.push(cmd.to_string()),
            );

            assert!(matches!(outcome, FrameOutcome::Stalled));
            assert_eq!(sent, ["LIST"]);
            assert_eq!(state.checks.get_untracked().len(), 1);
        });
    }

    #[test]
    fn empty_list_still_requests_next() {
        with_state(|state| {
            state.phase.set(FeedPhase::Active);
            let mut sent = Vec::new();
            let outcome = handle_frame("[]", &state, |cmd| sent.push(cmd.to_string()));

            assert!(matches!(outcome, FrameOutcome::Rendered { appended: 0 }));
            assert_eq!(sent, ["LIST"]);
            assert!(state.checks.get_untracked().is_empty());
            assert_eq!(state.phase.get_untracked(), FeedPhase::Stalled);
        });
    }

    #[test]
    fn malformed_frame_neither_renders_nor_resends() {
        with_state(|state| {
            state.phase.set(FeedPhase::Active);
            let mut sent = Vec::new();
            let outcome = handle_frame("not json", &state, |cmd| sent.push(cmd.to_string()));

            assert!(matches!(outcome, FrameOutcome::Rejected(_)));
            assert!(sent.is_empty());
            assert!(state.checks.get_untracked().is_empty());
            // Parse failure aborts the frame, it does not stall the feed
            assert_eq!(state.phase.get_untracked(), FeedPhase::Active);
        });
    }

    #[test]
    fn rendering_is_append_only_and_order_preserving() {
        with_state(|state| {
            state.phase.set(FeedPhase::Active);
            handle_frame(
                r#"[["a", "1", ["ok", "x"]], ["b", "2", ["ok", "y"]], ["c", "3", ["ok", "z"]]]"#,
                &state,
                |_| {},
            );

            let names: Vec<_> = state
                .checks
                .get_untracked()
                .iter()
                .map(|r| r.name.clone())
                .collect();
            assert_eq!(names, ["a", "b", "c"]);
        });
    }
}
