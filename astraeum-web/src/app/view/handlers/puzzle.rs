use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use astraeum_game::puzzle::{EMPTY_SOLUTION_NOTICE, SOLVED_NOTICE, TIMEOUT_NOTICE};
use astraeum_game::{SessionAction, TickOutcome, ValidationError, validate_solution};

use crate::app::state::AppState;
use crate::app::view::handlers::{notify, report_failure};

pub fn build_puzzle_input(state: &AppState) -> Callback<AttrValue> {
    let input = state.puzzle_input.clone();
    Callback::from(move |value: AttrValue| input.set(value))
}

/// Schedules the shared advance into battle used by both a correct solution
/// and a countdown expiry.
fn schedule_advance(state: &AppState, after_ms: u32) {
    let session = state.session.dispatcher();
    Timeout::new(after_ms, move || {
        session.dispatch(SessionAction::AdvancedToBattle);
        session.dispatch(SessionAction::NotificationCleared);
    })
    .forget();
}

pub fn build_submit_solution(state: &AppState) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| {
        let timing = *state.timing;
        let raw = (*state.puzzle_input).clone();
        let solution = match validate_solution(&raw) {
            Ok(trimmed) => trimmed.to_string(),
            Err(ValidationError::SolutionEmpty) => {
                notify(&state, EMPTY_SOLUTION_NOTICE, timing.notification_ms);
                return;
            }
            Err(err) => {
                notify(&state, err.to_string(), timing.notification_ms);
                return;
            }
        };
        let (Some(game_id), Some(oracle_state_id)) =
            (state.session.game_id(), state.session.oracle_state_id)
        else {
            log::error!("solution submitted outside an active challenge");
            return;
        };

        // Counted before the request settles, success or not.
        state.session.dispatch(SessionAction::SolutionAttempted);
        state.puzzle_busy.set(true);

        let state = state.clone();
        spawn_local(async move {
            match state
                .api
                .solve_puzzle(game_id, oracle_state_id, &solution)
                .await
            {
                Ok(verdict) if verdict.valid => {
                    notify(&state, SOLVED_NOTICE, timing.solve_advance_ms);
                    schedule_advance(&state, timing.solve_advance_ms);
                }
                Ok(verdict) => {
                    state.puzzle_input.set(AttrValue::default());
                    notify(
                        &state,
                        format!("Incorrect solution. Attempts: {}", verdict.attempts),
                        timing.notification_ms,
                    );
                }
                Err(err) => {
                    report_failure(&state, "solution validation", &err);
                    notify(&state, "Error validating solution", timing.notification_ms);
                }
            }
            state.puzzle_busy.set(false);
        });
    })
}

pub fn build_reveal_hint(state: &AppState) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| {
        let can_reveal = state
            .session
            .phase
            .puzzle()
            .is_some_and(astraeum_game::PuzzleSession::can_reveal_hint);
        if !can_reveal {
            return;
        }
        state.session.dispatch(SessionAction::HintRevealed);

        let session = state.session.dispatcher();
        Timeout::new(state.timing.hint_cooldown_ms, move || {
            session.dispatch(SessionAction::HintCooldownElapsed);
        })
        .forget();
    })
}

pub fn build_puzzle_tick(state: &AppState) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| {
        let Some(puzzle) = state.session.phase.puzzle() else {
            return;
        };
        // Peek at what this tick does before routing it through the store;
        // only the countdown itself moves the clock, so the preview is exact.
        let outcome = puzzle.clone().tick();
        state.session.dispatch(SessionAction::CountdownTicked);

        if outcome == TickOutcome::Expired {
            let timing = *state.timing;
            notify(&state, TIMEOUT_NOTICE, timing.solve_advance_ms);
            schedule_advance(&state, timing.solve_advance_ms);
        }
    })
}

/// Ask-the-oracles help line: spends an insight token on the current trial
/// and surfaces the reply.
pub fn build_spend_insight(state: &AppState) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| {
        let Some(game_id) = state.session.game_id() else {
            return;
        };
        let Some(question) = state
            .session
            .phase
            .puzzle()
            .map(|puzzle| puzzle.data().description.clone())
        else {
            return;
        };
        let timing = *state.timing;

        let state = state.clone();
        spawn_local(async move {
            match state.api.spend_insight(game_id, &question).await {
                Ok(reply) => notify(&state, reply.answer, timing.notification_ms),
                Err(err) => report_failure(&state, "insight request", &err),
            }
        });
    })
}
