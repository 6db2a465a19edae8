use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use astraeum_game::{Difficulty, SessionAction};

use crate::app::state::AppState;
use crate::app::view::handlers::{notify, report_failure};

/// Ensure a game exists and load its snapshot. Runs once authentication
/// settles; a failure is logged and the board stays on its placeholder.
pub fn spawn_game_init(state: &AppState) {
    if state.session.game.is_some() {
        state.game_loading.set(false);
        return;
    }
    state.game_loading.set(true);

    let state = state.clone();
    spawn_local(async move {
        let created = match state.api.create_game(Difficulty::Normal).await {
            Ok(created) => created,
            Err(err) => {
                report_failure(&state, "game creation", &err);
                state.game_loading.set(false);
                return;
            }
        };
        match state.api.fetch_game(created.game_id).await {
            Ok(game) => state.session.dispatch(SessionAction::GameLoaded(game)),
            Err(err) => report_failure(&state, "game load", &err),
        }
        state.game_loading.set(false);
    });
}

/// Opens the roster overlay and fetches its contents; closing discards them
/// so the next open shows fresh data.
pub fn build_toggle_inventory(state: &AppState) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| {
        let opening = !state.session.show_inventory;
        state
            .session
            .dispatch(SessionAction::InventoryShown(opening));
        if !opening {
            return;
        }
        state.inventory.set(None);
        let Some(game_id) = state.session.game_id() else {
            return;
        };

        let state = state.clone();
        spawn_local(async move {
            match state.api.fetch_inventory(game_id).await {
                Ok(inventory) => state.inventory.set(Some(inventory)),
                Err(err) => report_failure(&state, "inventory load", &err),
            }
        });
    })
}

pub fn build_close_inventory(state: &AppState) -> Callback<()> {
    let session = state.session.clone();
    Callback::from(move |()| session.dispatch(SessionAction::InventoryShown(false)))
}

pub fn build_save_game(state: &AppState) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| {
        let Some(game_id) = state.session.game_id() else {
            return;
        };
        let timing = *state.timing;

        let state = state.clone();
        spawn_local(async move {
            match state.api.save_game(game_id).await {
                Ok(ack) => {
                    let text = if ack.message.is_empty() {
                        String::from("Game saved")
                    } else {
                        ack.message
                    };
                    notify(&state, text, timing.notification_ms);
                }
                Err(err) => report_failure(&state, "game save", &err),
            }
        });
    })
}

/// Deployment is not wired to the server yet; the roster card only reports
/// the request.
pub fn build_deploy_army() -> Callback<usize> {
    Callback::from(|index: usize| log::debug!("deploy requested for army slot {index}"))
}
