use web_sys::HtmlSelectElement;
use yew::prelude::*;

use astraeum_game::{BattleAction, BattleSnapshot, BattleStatus, health_percent};

#[derive(Properties, Clone, PartialEq)]
pub struct BattlePageProps {
    pub oracle_name: AttrValue,
    #[prop_or_default]
    pub snapshot: Option<BattleSnapshot>,
    pub on_prepare: Callback<()>,
    pub on_action: Callback<BattleAction>,
}

fn health_bar(label: &str, health: i64, side: &'static str) -> Html {
    let width = format!("width: {}%", health_percent(health));
    html! {
        <div class={classes!("combatant", side)}>
            <h4>{ label.to_string() }</h4>
            <div class="health-bar">
                <div class={classes!("health-fill", side)} style={width} />
            </div>
            <p class="health-text">{ format!("{health} HP") }</p>
        </div>
    }
}

#[function_component(BattlePage)]
pub fn battle_page(props: &BattlePageProps) -> Html {
    // Ask the server for the opening snapshot once, when the view mounts
    // without one.
    {
        let on_prepare = props.on_prepare.clone();
        use_effect_with((), move |()| {
            on_prepare.emit(());
            || {}
        });
    }

    let selected = use_state(BattleAction::default);

    let Some(snapshot) = &props.snapshot else {
        return html! {
            <div class="combat-loading" data-testid="combat-loading">
                { "Preparing battle..." }
            </div>
        };
    };

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>()
                && let Ok(action) = select.value().parse::<BattleAction>()
            {
                selected.set(action);
            }
        })
    };
    let on_execute = {
        let selected = selected.clone();
        let on_action = props.on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(*selected))
    };

    html! {
        <div class="combat-view" data-testid="combat-view">
            <div class="combat-header">
                <h3>{ format!("Battle vs {}", props.oracle_name) }</h3>
                <p>{ format!("Turn: {}", snapshot.turn) }</p>
            </div>

            <div class="combat-arena">
                { health_bar("Your Army", snapshot.player_health, "player") }
                <div class="combat-vs">{ "VS" }</div>
                { health_bar("Oracle Forces", snapshot.enemy_health, "enemy") }
            </div>

            <div class="battle-log">
                <h4>{ "Battle Log" }</h4>
                { for snapshot.battle_log.iter().map(|entry| html! {
                    <p>{ entry.clone() }</p>
                }) }
            </div>

            if snapshot.status == BattleStatus::InProgress {
                <div class="combat-actions">
                    <select onchange={on_select} class="action-select" value={selected.as_str()}>
                        { for BattleAction::ALL.iter().map(|action| html! {
                            <option
                                value={action.as_str()}
                                selected={*action == *selected}
                            >
                                { action.label() }
                            </option>
                        }) }
                    </select>
                    <button onclick={on_execute} class="action-btn">
                        { "Execute Action" }
                    </button>
                </div>
            }
        </div>
    }
}
