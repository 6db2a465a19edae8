//! Bearer-token persistence backed by browser `localStorage`.

use astraeum_game::validate_token_format;
use gloo::storage::{LocalStorage, Storage};

const TOKEN_KEY: &str = "astraeum.auth.token";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Persist the session token.
///
/// # Errors
///
/// Returns an error when `localStorage` rejects the write.
pub fn save_token(token: &str) -> Result<(), StorageError> {
    LocalStorage::set(TOKEN_KEY, token).map_err(|e| StorageError::Storage(format!("{e:?}")))
}

/// Load the persisted token, discarding anything that no longer looks like
/// a bearer token.
#[must_use]
pub fn load_token() -> Option<String> {
    let token: String = LocalStorage::get(TOKEN_KEY).ok()?;
    if validate_token_format(&token).is_err() {
        LocalStorage::delete(TOKEN_KEY);
        return None;
    }
    Some(token)
}

pub fn clear_token() {
    LocalStorage::delete(TOKEN_KEY);
}
