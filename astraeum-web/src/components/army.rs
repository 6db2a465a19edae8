use yew::prelude::*;

use astraeum_game::ArmyUnit;

#[derive(Properties, Clone, PartialEq)]
pub struct ArmyPanelProps {
    pub armies: Vec<ArmyUnit>,
    pub on_deploy: Callback<usize>,
}

fn unit_card(index: usize, unit: &ArmyUnit, on_deploy: &Callback<usize>) -> Html {
    let status = if unit.is_deployed { "DEPLOYED" } else { "RESERVE" };
    let morale_width = format!("width: {}%", unit.morale_percent());
    let deploy = (!unit.is_deployed).then(|| {
        let on_deploy = on_deploy.clone();
        let onclick = Callback::from(move |_: MouseEvent| on_deploy.emit(index));
        html! { <button {onclick} class="deploy-btn">{ "Deploy" }</button> }
    });

    html! {
        <div class={classes!("army-unit-card", unit.is_deployed.then_some("deployed"))}>
            <div class="unit-header">
                <h4>{ unit.unit_name.clone() }</h4>
                <span class="unit-status">{ status }</span>
            </div>
            <div class="unit-stats">
                <div class="stat-row">
                    <span>{ "Quantity:" }</span>
                    <span class="stat-value">{ unit.quantity }</span>
                </div>
                <div class="stat-row">
                    <span>{ "Health:" }</span>
                    <span class="stat-value">
                        { format!("{}/{}", unit.total_health, unit.max_health()) }
                    </span>
                </div>
                <div class="stat-row">
                    <span>{ "Morale:" }</span>
                    <div class="morale-bar">
                        <div class="morale-fill" style={morale_width} />
                    </div>
                </div>
                <div class="stat-row">
                    <span>{ "Level:" }</span>
                    <span class="stat-value">{ unit.experience_level }</span>
                </div>
            </div>
            { deploy }
        </div>
    }
}

#[function_component(ArmyPanel)]
pub fn army_panel(props: &ArmyPanelProps) -> Html {
    html! {
        <div class="army-panel">
            <h3>{ "Army Units" }</h3>
            <div class="army-grid">
                { for props
                    .armies
                    .iter()
                    .enumerate()
                    .map(|(index, unit)| unit_card(index, unit, &props.on_deploy)) }
            </div>
        </div>
    }
}
