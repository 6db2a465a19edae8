//! Boot sequence: timing config, session restore, game creation, and the
//! realtime channel lifecycle.

#[cfg(target_arch = "wasm32")]
use astraeum_game::{ReconnectPolicy, ServerEvent, SessionAction, TimingConfig};
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::api::ApiError;
#[cfg(target_arch = "wasm32")]
use crate::app::state::{AppState, AuthStatus};
#[cfg(target_arch = "wasm32")]
use crate::app::view::handlers;
#[cfg(target_arch = "wasm32")]
use crate::audio::AudioCue;
#[cfg(target_arch = "wasm32")]
use crate::auth_store;
#[cfg(target_arch = "wasm32")]
use crate::ws::GameSocket;

/// Load the timing asset and restore a persisted session, if any.
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_bootstrap(app_state: &AppState) {
    let state = app_state.clone();
    use_effect_with((), move |()| {
        let timing =
            TimingConfig::from_json(include_str!("../../static/assets/data/timing.json"))
                .unwrap_or_default();
        state.timing.set(timing);

        wasm_bindgen_futures::spawn_local(async move {
            restore_session(&state).await;
        });
        || {}
    });
}

#[cfg(target_arch = "wasm32")]
async fn restore_session(state: &AppState) {
    if auth_store::load_token().is_none() {
        state.auth.set(AuthStatus::Anonymous);
        return;
    }
    match state.api.me().await {
        Ok(player) => {
            state.session.dispatch(SessionAction::SignedIn(player));
            state.auth.set(AuthStatus::Authenticated);
        }
        Err(err) => {
            // A rejected token is discarded; 401 already cleared it centrally.
            if !matches!(err, ApiError::Unauthorized) {
                auth_store::clear_token();
            }
            log::warn!("stored session not restored: {err}");
            state.auth.set(AuthStatus::Anonymous);
        }
    }
}

/// Create-or-load the game once authentication settles.
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_game_init(app_state: &AppState) {
    let state = app_state.clone();
    use_effect_with(*app_state.auth, move |auth| {
        if *auth == AuthStatus::Authenticated {
            handlers::spawn_game_init(&state);
        }
        || {}
    });
}

/// One realtime connection per (game, player) pair, opened when both become
/// known and torn down when either goes away.
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_game_channel(app_state: &AppState) {
    let state = app_state.clone();
    use_effect_with(app_state.session.channel_identity(), move |identity| {
        if let Some((game_id, player_id)) = *identity {
            let socket = GameSocket::new(game_id, player_id, ReconnectPolicy::default());
            let handler_state = state.clone();
            socket.set_handler(move |event| dispatch_server_event(&handler_state, event));
            socket.connect();
            *state.socket.borrow_mut() = Some(socket);
        }
        let slot = state.socket.clone();
        move || {
            if let Some(socket) = slot.borrow_mut().take() {
                socket.close();
            }
        }
    });
}

/// Single inbound dispatch: every pushed event type is handled here, so a
/// new message type cannot be silently half-wired.
#[cfg(target_arch = "wasm32")]
fn dispatch_server_event(state: &AppState, event: ServerEvent) {
    match event {
        ServerEvent::Connected(ack) => {
            log::debug!(
                "realtime channel ready for game {} player {}",
                ack.game_id,
                ack.player_id
            );
        }
        ServerEvent::PlayerAction(data) => log::debug!("player action echo: {data}"),
        ServerEvent::OracleDefeated(defeated) => {
            state.audio.play(AudioCue::Notification);
            handlers::notify(
                state,
                format!("Oracle {} has been defeated!", defeated.oracle_name),
                state.timing.defeat_broadcast_ms,
            );
        }
        ServerEvent::GameEvent(data) => log::debug!("game event: {data}"),
    }
}
