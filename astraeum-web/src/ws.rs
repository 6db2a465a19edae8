//! Real-time channel to the game server.
//!
//! One socket per (game, player) pair, owned by the app root and torn down
//! explicitly on logout. Delivery is at-most-once: sends are dropped unless
//! the socket is open, inbound frames are parsed into the typed event union
//! and malformed ones are logged and discarded. An unexpected close is
//! retried on the bounded backoff schedule from `astraeum-game`; once the
//! budget is spent the channel stays down without surfacing an error.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CloseEvent, ErrorEvent, MessageEvent, WebSocket};

use astraeum_game::{ClientMessage, ReconnectPolicy, ServerEvent, parse_server_event};

use crate::dom;

const DEFAULT_WS_BASE: &str = "ws://localhost:8000/ws";

type EventHandler = Rc<dyn Fn(ServerEvent)>;

struct SocketInner {
    url: String,
    policy: ReconnectPolicy,
    ws: Option<WebSocket>,
    attempts: u32,
    handler: Option<EventHandler>,
    reconnect: Option<Timeout>,
    shutdown: bool,
    // Keep the JS callbacks alive for as long as the socket is.
    _on_open: Option<Closure<dyn FnMut()>>,
    _on_message: Option<Closure<dyn FnMut(MessageEvent)>>,
    _on_close: Option<Closure<dyn FnMut(CloseEvent)>>,
    _on_error: Option<Closure<dyn FnMut(ErrorEvent)>>,
}

pub struct GameSocket {
    inner: Rc<RefCell<SocketInner>>,
}

impl GameSocket {
    #[must_use]
    pub fn new(game_id: i64, player_id: i64, policy: ReconnectPolicy) -> Self {
        Self {
            inner: Rc::new(RefCell::new(SocketInner {
                url: format!("{DEFAULT_WS_BASE}/{game_id}/{player_id}"),
                policy,
                ws: None,
                attempts: 0,
                handler: None,
                reconnect: None,
                shutdown: false,
                _on_open: None,
                _on_message: None,
                _on_close: None,
                _on_error: None,
            })),
        }
    }

    /// Install the inbound event handler. A single slot: registering again
    /// replaces the previous handler.
    pub fn set_handler(&self, handler: impl Fn(ServerEvent) + 'static) {
        self.inner.borrow_mut().handler = Some(Rc::new(handler));
    }

    pub fn connect(&self) {
        Self::open(&self.inner);
    }

    /// Fire-and-forget send. Dropped silently unless the socket is open.
    pub fn send(&self, message: &ClientMessage) {
        let guard = self.inner.borrow();
        let Some(ws) = &guard.ws else {
            return;
        };
        if ws.ready_state() != WebSocket::OPEN {
            return;
        }
        match message.to_frame() {
            Ok(frame) => {
                if let Err(err) = ws.send_with_str(&frame) {
                    log::warn!("send failed: {}", dom::js_error_message(&err));
                }
            }
            Err(err) => log::warn!("unencodable outbound message: {err}"),
        }
    }

    /// Deliberate teardown: cancels any pending reconnect and closes the
    /// underlying socket. No reconnect follows.
    pub fn close(&self) {
        let mut guard = self.inner.borrow_mut();
        guard.shutdown = true;
        guard.reconnect = None;
        if let Some(ws) = guard.ws.take() {
            let _ = ws.close();
        }
    }

    fn open(inner: &Rc<RefCell<SocketInner>>) {
        if inner.borrow().shutdown {
            return;
        }
        let url = inner.borrow().url.clone();
        let ws = match WebSocket::new(&url) {
            Ok(ws) => ws,
            Err(err) => {
                dom::console_error(&format!(
                    "Failed to open realtime channel: {}",
                    dom::js_error_message(&err)
                ));
                Self::schedule_reconnect(inner);
                return;
            }
        };

        let on_open = {
            let inner = inner.clone();
            Closure::wrap(Box::new(move || {
                inner.borrow_mut().attempts = 0;
                log::debug!("realtime channel connected");
            }) as Box<dyn FnMut()>)
        };

        let on_message = {
            let inner = inner.clone();
            Closure::wrap(Box::new(move |event: MessageEvent| {
                let Some(text) = event.data().as_string() else {
                    return;
                };
                Self::dispatch_frame(&inner, &text);
            }) as Box<dyn FnMut(MessageEvent)>)
        };

        let on_close = {
            let inner = inner.clone();
            Closure::wrap(Box::new(move |_: CloseEvent| {
                if inner.borrow().shutdown {
                    return;
                }
                log::debug!("realtime channel closed");
                Self::schedule_reconnect(&inner);
            }) as Box<dyn FnMut(CloseEvent)>)
        };

        let on_error = Closure::wrap(Box::new(move |event: ErrorEvent| {
            log::warn!("realtime channel error: {}", event.message());
        }) as Box<dyn FnMut(ErrorEvent)>);

        ws.set_onopen(Some(on_open.as_ref().unchecked_ref()));
        ws.set_onmessage(Some(on_message.as_ref().unchecked_ref()));
        ws.set_onclose(Some(on_close.as_ref().unchecked_ref()));
        ws.set_onerror(Some(on_error.as_ref().unchecked_ref()));

        let mut guard = inner.borrow_mut();
        guard.ws = Some(ws);
        guard._on_open = Some(on_open);
        guard._on_message = Some(on_message);
        guard._on_close = Some(on_close);
        guard._on_error = Some(on_error);
    }

    fn dispatch_frame(inner: &Rc<RefCell<SocketInner>>, raw: &str) {
        match parse_server_event(raw) {
            Ok(event) => {
                // Clone the handler out so it may call back into the socket
                // without holding the borrow.
                let handler = inner.borrow().handler.clone();
                if let Some(handler) = handler {
                    handler(event);
                }
            }
            Err(err) => log::warn!("dropping malformed frame: {err}"),
        }
    }

    fn schedule_reconnect(inner: &Rc<RefCell<SocketInner>>) {
        let mut guard = inner.borrow_mut();
        guard.attempts += 1;
        let attempt = guard.attempts;
        match guard.policy.next_delay_ms(attempt) {
            Some(delay) => {
                log::warn!("reconnecting realtime channel, attempt {attempt} in {delay} ms");
                let rc = inner.clone();
                guard.reconnect = Some(Timeout::new(delay, move || {
                    rc.borrow_mut().reconnect = None;
                    Self::open(&rc);
                }));
            }
            // Budget spent; stay down without surfacing a terminal error.
            None => log::warn!("realtime channel gave up after {} attempts", attempt - 1),
        }
    }
}

impl Drop for GameSocket {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counting_handler(socket: &GameSocket) -> Rc<Cell<u32>> {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        socket.set_handler(move |_| counter.set(counter.get() + 1));
        calls
    }

    #[test]
    fn handler_registration_is_last_write_wins() {
        let socket = GameSocket::new(1, 2, ReconnectPolicy::default());
        let first = counting_handler(&socket);
        let second = counting_handler(&socket);

        GameSocket::dispatch_frame(&socket.inner, r#"{"type": "game_event", "data": {}}"#);

        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
    }

    #[test]
    fn malformed_and_unknown_frames_never_reach_the_handler() {
        let socket = GameSocket::new(1, 2, ReconnectPolicy::default());
        let calls = counting_handler(&socket);

        GameSocket::dispatch_frame(&socket.inner, "not json");
        GameSocket::dispatch_frame(&socket.inner, r#"{"type": "tremor", "data": {}}"#);
        assert_eq!(calls.get(), 0);

        GameSocket::dispatch_frame(
            &socket.inner,
            r#"{"type": "oracle_defeated", "data": {"oracle_name": "Nyx"}}"#,
        );
        assert_eq!(calls.get(), 1);
    }
}
