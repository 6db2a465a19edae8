mod auth;
mod battle;
mod game;
mod oracle;
mod puzzle;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use astraeum_game::{BattleAction, OracleSummary, SessionAction};

use crate::api::ApiError;
use crate::app::state::{AppState, AuthStatus};
use crate::auth_store;
use crate::pages::login::AuthSubmit;

pub use auth::{build_auth_submit, build_logout};
pub use battle::{build_battle_action, build_battle_prepare};
pub use game::{
    build_close_inventory, build_deploy_army, build_save_game, build_toggle_inventory,
    spawn_game_init,
};
pub use oracle::build_challenge;
pub use puzzle::{
    build_puzzle_input, build_puzzle_tick, build_reveal_hint, build_spend_insight,
    build_submit_solution,
};

#[derive(Clone)]
pub struct AppHandlers {
    pub auth_submit: Callback<AuthSubmit>,
    pub logout: Callback<()>,
    pub challenge: Callback<OracleSummary>,
    pub puzzle_input: Callback<AttrValue>,
    pub submit_solution: Callback<()>,
    pub reveal_hint: Callback<()>,
    pub puzzle_tick: Callback<()>,
    pub spend_insight: Callback<()>,
    pub battle_prepare: Callback<()>,
    pub battle_action: Callback<BattleAction>,
    pub toggle_inventory: Callback<()>,
    pub close_inventory: Callback<()>,
    pub deploy_army: Callback<usize>,
    pub save_game: Callback<()>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState) -> Self {
        Self {
            auth_submit: build_auth_submit(state),
            logout: build_logout(state),
            challenge: build_challenge(state),
            puzzle_input: build_puzzle_input(state),
            submit_solution: build_submit_solution(state),
            reveal_hint: build_reveal_hint(state),
            puzzle_tick: build_puzzle_tick(state),
            spend_insight: build_spend_insight(state),
            battle_prepare: build_battle_prepare(state),
            battle_action: build_battle_action(state),
            toggle_inventory: build_toggle_inventory(state),
            close_inventory: build_close_inventory(state),
            deploy_army: build_deploy_army(),
            save_game: build_save_game(state),
        }
    }
}

/// Surface a transient notification and schedule its fixed-delay clear.
/// Concurrent notifications are not queued; the last write wins, and a
/// stale clear timer fires unconditionally.
pub(crate) fn notify(state: &AppState, text: impl Into<String>, clear_after_ms: u32) {
    state.session.dispatch(SessionAction::Notified(text.into()));
    let session = state.session.dispatcher();
    Timeout::new(clear_after_ms, move || {
        session.dispatch(SessionAction::NotificationCleared);
    })
    .forget();
}

/// Expired or rejected credentials anywhere force the app back to the entry
/// screen: socket down, token gone, state reset.
pub(crate) fn force_logout(state: &AppState) {
    if let Some(socket) = state.socket.borrow_mut().take() {
        socket.close();
    }
    auth_store::clear_token();
    state.session.dispatch(SessionAction::SignedOut);
    state.inventory.set(None);
    state.game_loading.set(true);
    state.puzzle_input.set(AttrValue::default());
    state.puzzle_busy.set(false);
    state.auth.set(AuthStatus::Anonymous);
}

/// Failures on game actions are diagnostic-only; the UI stays where it is.
/// A 401 is the one exception and forces re-authentication.
pub(crate) fn report_failure(state: &AppState, context: &str, err: &ApiError) {
    if matches!(err, ApiError::Unauthorized) {
        force_logout(state);
        return;
    }
    log::error!("{context}: {err}");
}
