use yew::prelude::*;

use crate::app::state::AppState;
use crate::app::view::handlers::AppHandlers;
use crate::pages::map::MapPage;

pub fn render_menu(state: &AppState, handlers: &AppHandlers) -> Html {
    if *state.game_loading {
        return html! {
            <div class="game-loading" data-testid="game-loading">
                { "Initializing Astraeum..." }
            </div>
        };
    }
    state.session.game.clone().map_or_else(
        || {
            html! {
                <div class="game-loading" data-testid="game-loading">
                    { "Initializing Astraeum..." }
                </div>
            }
        },
        |game| {
            html! {
                <MapPage game={game} on_challenge={handlers.challenge.clone()} />
            }
        },
    )
}
