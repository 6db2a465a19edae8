use yew::prelude::*;

use astraeum_game::GameSnapshot;

#[derive(Properties, Clone, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub player_name: Option<AttrValue>,
    #[prop_or_default]
    pub game: Option<GameSnapshot>,
    pub on_toggle_inventory: Callback<()>,
    pub on_save: Callback<()>,
    pub on_logout: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let stats = props.game.as_ref().map(|game| {
        html! {
            <div class="game-stats">
                <span>{ format!("Stage: {}/13", game.current_stage) }</span>
                <span>{ format!("Oracles Defeated: {}/13", game.oracles_defeated) }</span>
                <span>{ format!("Gold: {}", game.resources.gold) }</span>
                <span>{ format!("Insight Tokens: {}", game.resources.insight_tokens) }</span>
            </div>
        }
    });

    let on_inventory = {
        let cb = props.on_toggle_inventory.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_save = {
        let cb = props.on_save.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_logout = {
        let cb = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <header class="game-header">
            <h1 class="game-title">{ "Thirteen Oracles of Astraeum" }</h1>
            { stats }
            <div class="header-actions">
                if let Some(name) = &props.player_name {
                    <span class="player-name">{ name.clone() }</span>
                }
                <button onclick={on_inventory} class="inventory-btn">{ "Inventory" }</button>
                <button onclick={on_save} class="save-btn">{ "Save" }</button>
                <button onclick={on_logout} class="logout-btn">{ "Leave Astraeum" }</button>
            </div>
        </header>
    }
}
