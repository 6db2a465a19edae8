use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use astraeum_game::{
    Player, SessionAction, TokenGrant, validate_email, validate_password, validate_username,
};

use crate::app::state::{AppState, AuthStatus};
use crate::app::view::handlers::{force_logout, report_failure};
use crate::auth_store;
use crate::pages::login::AuthSubmit;

fn accept_grant(state: &AppState, grant: &TokenGrant) {
    if let Err(err) = auth_store::save_token(&grant.access_token) {
        log::error!("failed to persist session token: {err}");
    }
    state.session.dispatch(SessionAction::SignedIn(Player {
        id: grant.player_id,
        username: grant.username.clone(),
        email: String::new(),
        display_name: None,
        total_games: 0,
        games_won: 0,
        oracles_defeated: 0,
    }));
    state.auth.set(AuthStatus::Authenticated);
}

/// Registration applies the full client-side ruleset before the request;
/// login forwards credentials as typed.
fn precheck(submit: &AuthSubmit) -> Result<(), String> {
    if let AuthSubmit::Register {
        username,
        email,
        password,
    } = submit
    {
        validate_username(username).map_err(|e| e.to_string())?;
        validate_email(email).map_err(|e| e.to_string())?;
        validate_password(password).map_err(|e| e.to_string())?;
    }
    Ok(())
}

pub fn build_auth_submit(state: &AppState) -> Callback<AuthSubmit> {
    let state = state.clone();
    Callback::from(move |submit: AuthSubmit| {
        state.auth_error.set(None);
        if let Err(message) = precheck(&submit) {
            state.auth_error.set(Some(message.into()));
            return;
        }
        state.auth_busy.set(true);

        let state = state.clone();
        spawn_local(async move {
            let outcome = match &submit {
                AuthSubmit::Login { username, password } => {
                    state.api.login(username, password).await
                }
                AuthSubmit::Register {
                    username,
                    email,
                    password,
                } => state.api.register(username, email, password, None).await,
            };
            match outcome {
                Ok(grant) => accept_grant(&state, &grant),
                Err(err) => {
                    log::error!("authentication failed: {err}");
                    state.auth_error.set(Some(err.to_string().into()));
                }
            }
            state.auth_busy.set(false);
        });
    })
}

pub fn build_logout(state: &AppState) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| {
        let state = state.clone();
        spawn_local(async move {
            // Best effort: the server session is invalidated when reachable,
            // but the local teardown happens either way.
            if let Err(err) = state.api.logout().await {
                report_failure(&state, "logout", &err);
            }
            force_logout(&state);
        });
    })
}
