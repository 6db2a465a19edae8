use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use astraeum_game::{BattleAction, BattleContext, SessionAction, resolve_outcome};

use crate::app::state::AppState;
use crate::app::view::handlers::{notify, report_failure};
use crate::audio::AudioCue;

/// Fired once when the battle view mounts with no snapshot yet. A failure
/// leaves the preparing placeholder in place; there is no retry.
pub fn build_battle_prepare(state: &AppState) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| {
        let preparing = state
            .session
            .phase
            .battle()
            .is_some_and(BattleContext::is_preparing);
        if !preparing {
            return;
        }
        let (Some(game_id), Some(oracle_id)) = (
            state.session.game_id(),
            state.session.selected_oracle.as_ref().map(|o| o.id),
        ) else {
            log::error!("battle requested with no selected oracle");
            return;
        };

        let state = state.clone();
        spawn_local(async move {
            match state.api.start_battle(game_id, oracle_id).await {
                Ok(grant) => state
                    .session
                    .dispatch(SessionAction::BattleSnapshotReplaced(grant.battle_state)),
                Err(err) => report_failure(&state, "battle start", &err),
            }
        });
    })
}

pub fn build_battle_action(state: &AppState) -> Callback<BattleAction> {
    let state = state.clone();
    Callback::from(move |action: BattleAction| {
        let (Some(game_id), Some(oracle_id)) = (
            state.session.game_id(),
            state.session.selected_oracle.as_ref().map(|o| o.id),
        ) else {
            return;
        };
        let timing = *state.timing;

        let state = state.clone();
        spawn_local(async move {
            let snapshot = match state.api.battle_action(game_id, oracle_id, action).await {
                Ok(snapshot) => snapshot,
                Err(err) => {
                    report_failure(&state, "battle action", &err);
                    return;
                }
            };
            let status = snapshot.status;
            state
                .session
                .dispatch(SessionAction::BattleSnapshotReplaced(snapshot));

            let Some(effects) = resolve_outcome(status, &timing) else {
                return;
            };
            notify(&state, effects.notification, effects.return_delay_ms);
            state.audio.play(if effects.confirm_defeat {
                AudioCue::Victory
            } else {
                AudioCue::Defeat
            });

            if effects.confirm_defeat {
                // Exactly one confirmation per won battle, then a fresh
                // snapshot so the map shows the fallen oracle.
                match state.api.confirm_defeat(game_id, oracle_id).await {
                    Ok(_) => match state.api.fetch_game(game_id).await {
                        Ok(game) => state.session.dispatch(SessionAction::GameLoaded(game)),
                        Err(err) => report_failure(&state, "game refresh", &err),
                    },
                    Err(err) => report_failure(&state, "defeat confirmation", &err),
                }
            }

            let session = state.session.dispatcher();
            Timeout::new(effects.return_delay_ms, move || {
                session.dispatch(SessionAction::ReturnedToMenu);
            })
            .forget();
        });
    })
}
