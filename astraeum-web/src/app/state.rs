use std::cell::RefCell;
use std::ops::Deref;
use std::rc::Rc;

use astraeum_game::{Inventory, Session, SessionAction, TimingConfig};
use yew::prelude::*;

use crate::api::ApiClient;
use crate::audio::AudioService;
use crate::ws::GameSocket;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStatus {
    /// Persisted token being verified on boot.
    Checking,
    Anonymous,
    Authenticated,
}

/// Reducer wrapper around the core session store. Every mutation arrives as
/// a [`SessionAction`] and is applied against the current state, so timers
/// and in-flight responses can never publish from a stale snapshot.
#[derive(Debug, PartialEq, Default)]
pub struct SessionStore {
    session: Session,
}

impl Reducible for SessionStore {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: SessionAction) -> Rc<Self> {
        let mut session = self.session.clone();
        session.apply(action);
        Rc::new(Self { session })
    }
}

impl Deref for SessionStore {
    type Target = Session;

    fn deref(&self) -> &Session {
        &self.session
    }
}

#[derive(Clone)]
pub struct AppState {
    pub auth: UseStateHandle<AuthStatus>,
    pub auth_error: UseStateHandle<Option<AttrValue>>,
    pub auth_busy: UseStateHandle<bool>,
    pub session: UseReducerHandle<SessionStore>,
    pub inventory: UseStateHandle<Option<Inventory>>,
    pub timing: UseStateHandle<TimingConfig>,
    pub game_loading: UseStateHandle<bool>,
    pub puzzle_input: UseStateHandle<AttrValue>,
    pub puzzle_busy: UseStateHandle<bool>,
    pub api: Rc<ApiClient>,
    pub audio: Rc<AudioService>,
    /// One live socket per (game, player) pair, torn down on logout.
    pub socket: Rc<RefCell<Option<GameSocket>>>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        auth: use_state(|| AuthStatus::Checking),
        auth_error: use_state(|| None),
        auth_busy: use_state(|| false),
        session: use_reducer(SessionStore::default),
        inventory: use_state(|| None),
        timing: use_state(TimingConfig::default_config),
        game_loading: use_state(|| true),
        puzzle_input: use_state(AttrValue::default),
        puzzle_busy: use_state(|| false),
        api: use_memo((), |()| ApiClient::new()),
        audio: use_memo((), |()| AudioService::new()),
        socket: use_mut_ref(|| None),
    }
}
