use yew::prelude::*;

use crate::app::state::AppState;
use crate::pages::confrontation::ConfrontationPage;

pub fn render_confrontation(state: &AppState) -> Html {
    let oracle_name: AttrValue = state
        .session
        .selected_oracle
        .as_ref()
        .map_or_else(|| AttrValue::from("the Oracles"), |o| o.name.clone().into());
    html! { <ConfrontationPage oracle_name={oracle_name} /> }
}
