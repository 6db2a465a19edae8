use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ConfrontationPageProps {
    pub oracle_name: AttrValue,
}

/// Terminal confrontation screen. Reached through conditions outside the
/// puzzle/battle loop; rendering is all it does.
#[function_component(ConfrontationPage)]
pub fn confrontation_page(props: &ConfrontationPageProps) -> Html {
    html! {
        <div class="confrontation" data-testid="confrontation-view">
            <p>{ format!("Final confrontation with {}...", props.oracle_name) }</p>
        </div>
    }
}
