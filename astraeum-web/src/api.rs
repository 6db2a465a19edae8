//! REST client for the Astraeum backend.
//!
//! Every request attaches the persisted bearer token; a 401 from any
//! endpoint clears the token so the app falls back to the entry screen.
//! Payloads are deserialized into the typed shapes from `astraeum-game`
//! right here at the boundary.

use gloo_net::http::{RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use astraeum_game::{
    Acknowledgement, BattleAction, BattleSnapshot, BattleStartGrant, ChallengeGrant, Difficulty,
    GameCreated, GameSnapshot, Inventory, Player, SolveVerdict, TokenGrant,
};

use crate::auth_store;

const DEFAULT_API_BASE: &str = "http://localhost:8000/api/v1";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// 401 from any endpoint; the token has already been discarded.
    #[error("Session expired")]
    Unauthorized,
    #[error("{detail}")]
    Rejected { status: u16, detail: String },
    #[error("Network error: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("Malformed game snapshot: {0}")]
    InvalidSnapshot(#[from] astraeum_game::SnapshotError),
}

/// FastAPI-style error body.
#[derive(Deserialize)]
struct ErrorBody {
    detail: String,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    base: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    #[must_use]
    pub fn new() -> Self {
        Self {
            base: String::from(DEFAULT_API_BASE),
        }
    }

    #[must_use]
    pub fn with_base(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    fn authorize(builder: RequestBuilder) -> RequestBuilder {
        match auth_store::load_token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
            None => builder,
        }
    }

    async fn accept<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        match response.status() {
            200..=299 => Ok(response.json::<T>().await?),
            401 => {
                auth_store::clear_token();
                Err(ApiError::Unauthorized)
            }
            status => {
                let detail = response
                    .json::<ErrorBody>()
                    .await
                    .map_or_else(|_| format!("Request failed ({status})"), |body| body.detail);
                Err(ApiError::Rejected { status, detail })
            }
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = Self::authorize(gloo_net::http::Request::get(&self.url(path)))
            .send()
            .await?;
        Self::accept(response).await
    }

    async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        body: Option<&serde_json::Value>,
    ) -> Result<T, ApiError> {
        let mut builder = Self::authorize(gloo_net::http::Request::post(&self.url(path)));
        if !query.is_empty() {
            builder = builder.query(query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        let response = match body {
            Some(body) => builder.json(body)?.send().await?,
            None => builder.send().await?,
        };
        Self::accept(response).await
    }

    // -- auth --------------------------------------------------------------

    /// # Errors
    ///
    /// Returns the failure surfaced by the register endpoint.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
        display_name: Option<&str>,
    ) -> Result<TokenGrant, ApiError> {
        self.post(
            "/auth/register",
            &[],
            Some(&serde_json::json!({
                "username": username,
                "email": email,
                "password": password,
                "display_name": display_name,
            })),
        )
        .await
    }

    /// # Errors
    ///
    /// Returns the failure surfaced by the login endpoint.
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenGrant, ApiError> {
        self.post(
            "/auth/login",
            &[],
            Some(&serde_json::json!({
                "username": username,
                "password": password,
            })),
        )
        .await
    }

    /// # Errors
    ///
    /// Returns the failure surfaced by the logout endpoint.
    pub async fn logout(&self) -> Result<Acknowledgement, ApiError> {
        self.post("/auth/logout", &[], None).await
    }

    /// # Errors
    ///
    /// Fails when the persisted token is no longer accepted.
    pub async fn me(&self) -> Result<Player, ApiError> {
        self.get("/auth/me").await
    }

    // -- game --------------------------------------------------------------

    /// # Errors
    ///
    /// Returns the failure surfaced by the create endpoint.
    pub async fn create_game(&self, difficulty: Difficulty) -> Result<GameCreated, ApiError> {
        self.post(
            "/game/create",
            &[],
            Some(&serde_json::json!({"difficulty": difficulty.as_str()})),
        )
        .await
    }

    /// Fetches and validates the authoritative progress record. A snapshot
    /// that fails its shape check is rejected instead of rendered.
    ///
    /// # Errors
    ///
    /// Returns the transport failure or the shape violation.
    pub async fn fetch_game(&self, game_id: i64) -> Result<GameSnapshot, ApiError> {
        let snapshot: GameSnapshot = self.get(&format!("/game/{game_id}")).await?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// # Errors
    ///
    /// Returns the failure surfaced by the inventory endpoint.
    pub async fn fetch_inventory(&self, game_id: i64) -> Result<Inventory, ApiError> {
        self.get(&format!("/game/{game_id}/inventory")).await
    }

    /// # Errors
    ///
    /// Returns the failure surfaced by the save endpoint.
    pub async fn save_game(&self, game_id: i64) -> Result<Acknowledgement, ApiError> {
        self.post(&format!("/game/{game_id}/save"), &[], None).await
    }

    /// Spend an insight token on a question to the oracles.
    ///
    /// # Errors
    ///
    /// Returns the failure surfaced by the insight endpoint.
    pub async fn spend_insight(
        &self,
        game_id: i64,
        question: &str,
    ) -> Result<astraeum_game::InsightReply, ApiError> {
        self.post(
            &format!("/game/{game_id}/insight"),
            &[],
            Some(&serde_json::json!({"question": question})),
        )
        .await
    }

    // -- oracle ------------------------------------------------------------

    /// # Errors
    ///
    /// Returns the failure surfaced by the challenge endpoint.
    pub async fn challenge_oracle(
        &self,
        game_id: i64,
        oracle_name: &str,
    ) -> Result<ChallengeGrant, ApiError> {
        self.post(
            "/oracle/challenge",
            &[("game_id", game_id.to_string())],
            Some(&serde_json::json!({"oracle_name": oracle_name})),
        )
        .await
    }

    /// # Errors
    ///
    /// Returns the failure surfaced by the solve endpoint.
    pub async fn solve_puzzle(
        &self,
        game_id: i64,
        oracle_state_id: i64,
        solution: &str,
    ) -> Result<SolveVerdict, ApiError> {
        self.post(
            &format!("/oracle/{game_id}/puzzle/solve"),
            &[],
            Some(&serde_json::json!({
                "oracle_state_id": oracle_state_id,
                "solution": solution,
            })),
        )
        .await
    }

    /// # Errors
    ///
    /// Returns the failure surfaced by the battle-start endpoint.
    pub async fn start_battle(
        &self,
        game_id: i64,
        oracle_id: i64,
    ) -> Result<BattleStartGrant, ApiError> {
        self.post(
            &format!("/oracle/{game_id}/battle/start"),
            &[("oracle_id", oracle_id.to_string())],
            None,
        )
        .await
    }

    /// # Errors
    ///
    /// Returns the failure surfaced by the battle-action endpoint.
    pub async fn battle_action(
        &self,
        game_id: i64,
        oracle_id: i64,
        action: BattleAction,
    ) -> Result<BattleSnapshot, ApiError> {
        self.post(
            &format!("/oracle/{game_id}/battle/action"),
            &[("oracle_id", oracle_id.to_string())],
            Some(&serde_json::json!({"action": action.as_str()})),
        )
        .await
    }

    /// Victory confirmation. Called exactly once per won battle; defeats are
    /// never reported.
    ///
    /// # Errors
    ///
    /// Returns the failure surfaced by the defeat endpoint.
    pub async fn confirm_defeat(
        &self,
        game_id: i64,
        oracle_id: i64,
    ) -> Result<Acknowledgement, ApiError> {
        self.post(&format!("/oracle/{game_id}/defeat/{oracle_id}"), &[], None)
            .await
    }
}
