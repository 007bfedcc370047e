//! WebSocket Client
//!
//! Connection to the smon check stream. One connection for the lifetime
//! of the page: if it cannot be established or drops, the feed stops and
//! only the footer status and the console say so. No reconnect.

use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CloseEvent, MessageEvent, WebSocket};

use super::feed::{self, FrameOutcome};
use super::global::{ConnState, GlobalState};

/// Handle to the single check-stream connection
pub struct StreamClient {
    ws: Rc<RefCell<Option<WebSocket>>>,
    url: String,
}

impl StreamClient {
    pub fn new(url: &str) -> Self {
        Self {
            ws: Rc::new(RefCell::new(None)),
            url: url.to_string(),
        }
    }

    /// Connect to the check stream
    pub fn connect(&self, state: GlobalState) {
        match WebSocket::new(&self.url) {
            Ok(ws) => {
                self.setup_handlers(&ws, state);
                *self.ws.borrow_mut() = Some(ws);
            }
            Err(e) => {
                web_sys::console::error_1(
                    &format!("stream connection failed: {:?}", e).into(),
                );
                state.conn.set(ConnState::Failed);
            }
        }
    }

    /// Set up WebSocket event handlers
    fn setup_handlers(&self, ws: &WebSocket, state: GlobalState) {
        // On open: request the initial list
        let state_clone = state.clone();
        let ws_open = ws.clone();
        let on_open = Closure::wrap(Box::new(move |_: JsValue| {
            web_sys::console::log_1(&"stream connected".into());
            state_clone.conn.set(ConnState::Open);
            feed::on_open(&state_clone, |cmd| send_command(&ws_open, cmd));
        }) as Box<dyn FnMut(JsValue)>);
        ws.set_onopen(Some(on_open.as_ref().unchecked_ref()));
        on_open.forget();

        // On message
        let state_clone = state.clone();
        let ws_msg = ws.clone();
        let on_message = Closure::wrap(Box::new(move |event: MessageEvent| {
            if let Ok(text) = event.data().dyn_into::<js_sys::JsString>() {
                let raw: String = text.into();
                let outcome =
                    feed::handle_frame(&raw, &state_clone, |cmd| send_command(&ws_msg, cmd));

                match outcome {
                    FrameOutcome::Rendered { appended } => {
                        web_sys::console::log_1(
                            &format!("rendered {} checks", appended).into(),
                        );
                        state_clone
                            .last_frame
                            .set(Some(chrono::Utc::now().timestamp_millis()));
                    }
                    FrameOutcome::Stalled => {
                        web_sys::console::log_1(&"feed stalled, frame ignored".into());
                    }
                    FrameOutcome::Rejected(e) => {
                        web_sys::console::error_1(
                            &format!("failed to parse check list: {}", e).into(),
                        );
                    }
                }
            }
        }) as Box<dyn FnMut(MessageEvent)>);
        ws.set_onmessage(Some(on_message.as_ref().unchecked_ref()));
        on_message.forget();

        // On close: status only, no reconnect
        let state_clone = state.clone();
        let on_close = Closure::wrap(Box::new(move |event: CloseEvent| {
            web_sys::console::log_1(
                &format!(
                    "stream closed: code={}, reason={}",
                    event.code(),
                    event.reason()
                )
                .into(),
            );
            state_clone.conn.set(ConnState::Closed);
        }) as Box<dyn FnMut(CloseEvent)>);
        ws.set_onclose(Some(on_close.as_ref().unchecked_ref()));
        on_close.forget();

        // On error
        let on_error = Closure::wrap(Box::new(move |e: JsValue| {
            web_sys::console::error_1(&format!("stream error: {:?}", e).into());
            state.conn.set(ConnState::Failed);
        }) as Box<dyn FnMut(JsValue)>);
        ws.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        on_error.forget();
    }
}

/// Send a text command; a send failure is logged and otherwise dropped
fn send_command(ws: &WebSocket, cmd: &str) {
    if let Err(e) = ws.send_with_str(cmd) {
        web_sys::console::error_1(&format!("failed to send {:?}: {:?}", cmd, e).into());
    }
}

/// Open the check-stream connection (call from app root)
pub fn init_stream(state: GlobalState, url: &str) {
    let client = StreamClient::new(url);
    client.connect(state);
}
