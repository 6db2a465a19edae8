use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use astraeum_game::{OracleSummary, SessionAction, ensure_challengeable};

use crate::app::state::AppState;
use crate::app::view::handlers::{notify, report_failure};

/// Map selection: guards the pick locally, then asks the oracle service for
/// the challenge. Oracle and puzzle enter the store in one update only once
/// the grant is back, so the puzzle phase never exists without its content.
pub fn build_challenge(state: &AppState) -> Callback<OracleSummary> {
    let state = state.clone();
    Callback::from(move |oracle: OracleSummary| {
        let timing = *state.timing;
        if let Err(rejection) = ensure_challengeable(&oracle) {
            notify(&state, rejection.to_string(), timing.notification_ms);
            return;
        }
        let Some(game_id) = state.session.game_id() else {
            log::error!("challenge requested with no active game");
            return;
        };

        let state = state.clone();
        spawn_local(async move {
            match state.api.challenge_oracle(game_id, &oracle.name).await {
                Ok(grant) => {
                    let entering = format!("Entering {}'s domain...", oracle.title);
                    state.puzzle_input.set(AttrValue::default());
                    state
                        .session
                        .dispatch(SessionAction::ChallengeAccepted { oracle, grant });
                    notify(&state, entering, timing.notification_ms);
                }
                Err(err) => report_failure(&state, "oracle challenge", &err),
            }
        });
    })
}
