use yew::prelude::*;

use astraeum_game::{GameSnapshot, OracleSummary};

#[derive(Properties, Clone, PartialEq)]
pub struct MapPageProps {
    pub game: GameSnapshot,
    pub on_challenge: Callback<OracleSummary>,
}

fn oracle_card(oracle: &OracleSummary, on_challenge: &Callback<OracleSummary>) -> Html {
    let status = oracle.status();
    let mut class = classes!("oracle-card");
    if oracle.is_defeated {
        class.push("defeated");
    }
    if oracle.is_hostile {
        class.push("hostile");
    }
    let onclick = {
        let oracle = oracle.clone();
        let on_challenge = on_challenge.clone();
        Callback::from(move |_: MouseEvent| on_challenge.emit(oracle.clone()))
    };
    html! {
        <div {class} {onclick} data-testid={format!("oracle-{}", oracle.id)}>
            <h3>{ oracle.name.clone() }</h3>
            <p class="oracle-domain">{ oracle.domain.clone() }</p>
            <p class="oracle-status">{ status.as_str() }</p>
        </div>
    }
}

/// The thirteen dominions. Selecting a card asks for the challenge; the
/// defeated-oracle guard lives in the handler so the rejection notice is
/// shared with every other entry point.
#[function_component(MapPage)]
pub fn map_page(props: &MapPageProps) -> Html {
    html! {
        <div class="map-view" data-testid="map-view">
            <h2>{ "Select an Oracle to Challenge" }</h2>
            <div class="oracle-grid">
                { for props
                    .game
                    .oracles
                    .iter()
                    .map(|oracle| oracle_card(oracle, &props.on_challenge)) }
            </div>
        </div>
    }
}
