use yew::prelude::*;

use astraeum_game::Inventory;

use crate::components::army::ArmyPanel;

#[derive(Properties, Clone, PartialEq)]
pub struct InventoryPanelProps {
    /// `None` while the fetch is in flight.
    #[prop_or_default]
    pub inventory: Option<Inventory>,
    pub on_close: Callback<()>,
    pub on_deploy: Callback<usize>,
}

fn item_section(title: &str, kind: &'static str, items: &[String], empty_note: &str) -> Html {
    let body = if items.is_empty() {
        html! { <p class="empty-message">{ empty_note.to_string() }</p> }
    } else {
        html! {
            { for items.iter().map(|item| html! {
                <div class={classes!("item-card", kind)}><span>{ item.clone() }</span></div>
            }) }
        }
    };
    html! {
        <section class="inventory-section">
            <h3>{ title.to_string() }</h3>
            <div class="item-list">{ body }</div>
        </section>
    }
}

#[function_component(InventoryPanel)]
pub fn inventory_panel(props: &InventoryPanelProps) -> Html {
    let close_overlay = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let close_button = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    let Some(inventory) = &props.inventory else {
        return html! {
            <div class="inventory-overlay" onclick={close_overlay}>
                <div class="inventory-panel" onclick={keep_open}>
                    <div class="inventory-loading">{ "Loading inventory..." }</div>
                </div>
            </div>
        };
    };

    html! {
        <div class="inventory-overlay" onclick={close_overlay}>
            <div class="inventory-panel" onclick={keep_open}>
                <div class="inventory-header">
                    <h2>{ "Inventory" }</h2>
                    <button onclick={close_button} class="close-btn">{ "\u{d7}" }</button>
                </div>
                <div class="inventory-content">
                    { item_section("Weapons", "weapon", &inventory.weapons, "No weapons") }
                    { item_section(
                        "Special Items",
                        "special",
                        &inventory.special_items,
                        "No special items yet",
                    ) }
                    { item_section("Potions", "potion", &inventory.potions, "No potions") }
                    <ArmyPanel
                        armies={inventory.armies.clone()}
                        on_deploy={props.on_deploy.clone()}
                    />
                </div>
            </div>
        </div>
    }
}
