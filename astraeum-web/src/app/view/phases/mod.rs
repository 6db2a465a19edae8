mod battle;
mod confrontation;
mod menu;
mod puzzle;

use astraeum_game::Phase;
use yew::prelude::*;

use crate::app::state::AppState;
use crate::app::view::handlers::AppHandlers;

pub use battle::render_battle;
pub use confrontation::render_confrontation;
pub use menu::render_menu;
pub use puzzle::render_puzzle;

pub fn render_main_view(state: &AppState, handlers: &AppHandlers) -> Html {
    match &state.session.phase {
        Phase::Menu => render_menu(state, handlers),
        Phase::Puzzle(puzzle) => render_puzzle(state, handlers, puzzle),
        Phase::Battle(ctx) => render_battle(state, handlers, ctx),
        Phase::Confrontation => render_confrontation(state),
    }
}
