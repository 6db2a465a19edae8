use astraeum_game::PuzzleSession;
use yew::prelude::*;

use crate::app::state::AppState;
use crate::app::view::handlers::AppHandlers;
use crate::pages::puzzle::PuzzlePage;

pub fn render_puzzle(state: &AppState, handlers: &AppHandlers, puzzle: &PuzzleSession) -> Html {
    state
        .session
        .selected_oracle
        .clone()
        .map_or_else(Html::default, |oracle| {
            let insight_tokens = state
                .session
                .game
                .as_ref()
                .map_or(0, |game| game.resources.insight_tokens);
            html! {
                <PuzzlePage
                    oracle={oracle}
                    puzzle={puzzle.clone()}
                    input={(*state.puzzle_input).clone()}
                    busy={*state.puzzle_busy}
                    insight_tokens={insight_tokens}
                    tick_ms={state.timing.puzzle_tick_ms}
                    on_input={handlers.puzzle_input.clone()}
                    on_submit={handlers.submit_solution.clone()}
                    on_hint={handlers.reveal_hint.clone()}
                    on_insight={handlers.spend_insight.clone()}
                    on_tick={handlers.puzzle_tick.clone()}
                />
            }
        })
}
