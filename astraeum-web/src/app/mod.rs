#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

pub mod bootstrap;
pub mod state;
pub mod view;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    html! { <AppInner /> }
}

#[cfg(target_arch = "wasm32")]
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let app_state = state::use_app_state();
    bootstrap::use_bootstrap(&app_state);
    bootstrap::use_game_init(&app_state);
    bootstrap::use_game_channel(&app_state);

    let handlers = view::AppHandlers::new(&app_state);
    view::render_app(&app_state, &handlers)
}
