pub mod handlers;
mod phases;

pub use handlers::AppHandlers;

use yew::prelude::*;

use crate::app::state::{AppState, AuthStatus};
use crate::components::header::Header;
use crate::components::inventory::InventoryPanel;
use crate::components::notification::NotificationBanner;
use crate::pages::login::LoginPage;

pub fn render_app(state: &AppState, handlers: &AppHandlers) -> Html {
    match *state.auth {
        AuthStatus::Checking => html! {
            <div class="boot-loading" data-testid="boot-loading">{ "Loading Astraeum..." }</div>
        },
        AuthStatus::Anonymous => html! {
            <LoginPage
                error={(*state.auth_error).clone()}
                busy={*state.auth_busy}
                on_submit={handlers.auth_submit.clone()}
            />
        },
        AuthStatus::Authenticated => {
            let player_name: Option<AttrValue> = state
                .session
                .player
                .as_ref()
                .map(|player| AttrValue::from(player.shown_name().to_string()));
            let notification: Option<AttrValue> = state
                .session
                .notification
                .clone()
                .map(AttrValue::from);
            html! {
                <div class="game-board">
                    <Header
                        player_name={player_name}
                        game={state.session.game.clone()}
                        on_toggle_inventory={handlers.toggle_inventory.clone()}
                        on_save={handlers.save_game.clone()}
                        on_logout={handlers.logout.clone()}
                    />
                    <NotificationBanner message={notification} />
                    <main class="game-main">
                        { phases::render_main_view(state, handlers) }
                    </main>
                    if state.session.show_inventory {
                        <InventoryPanel
                            inventory={(*state.inventory).clone()}
                            on_close={handlers.close_inventory.clone()}
                            on_deploy={handlers.deploy_army.clone()}
                        />
                    }
                </div>
            }
        }
    }
}
