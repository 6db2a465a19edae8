use astraeum_game::BattleContext;
use yew::prelude::*;

use crate::app::state::AppState;
use crate::app::view::handlers::AppHandlers;
use crate::pages::battle::BattlePage;

pub fn render_battle(state: &AppState, handlers: &AppHandlers, ctx: &BattleContext) -> Html {
    let oracle_name: AttrValue = state
        .session
        .selected_oracle
        .as_ref()
        .map_or_else(|| AttrValue::from("the Oracle"), |o| o.name.clone().into());
    html! {
        <BattlePage
            oracle_name={oracle_name}
            snapshot={ctx.snapshot.clone()}
            on_prepare={handlers.battle_prepare.clone()}
            on_action={handlers.battle_action.clone()}
        />
    }
}
