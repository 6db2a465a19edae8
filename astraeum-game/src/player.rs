use serde::{Deserialize, Serialize};

/// Authenticated player profile as returned by the auth endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub total_games: u32,
    #[serde(default)]
    pub games_won: u32,
    #[serde(default)]
    pub oracles_defeated: u32,
}

impl Player {
    /// Name shown in the header: display name when set, username otherwise.
    #[must_use]
    pub fn shown_name(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shown_name_prefers_display_name() {
        let mut player = Player {
            id: 1,
            username: String::from("akalias"),
            email: String::from("a@example.com"),
            display_name: Some(String::from("Akal of Argos")),
            total_games: 0,
            games_won: 0,
            oracles_defeated: 0,
        };
        assert_eq!(player.shown_name(), "Akal of Argos");

        player.display_name = Some(String::new());
        assert_eq!(player.shown_name(), "akalias");

        player.display_name = None;
        assert_eq!(player.shown_name(), "akalias");
    }

    #[test]
    fn profile_deserializes_with_missing_counters() {
        let player: Player =
            serde_json::from_str(r#"{"id": 7, "username": "pythia"}"#).expect("minimal profile");
        assert_eq!(player.total_games, 0);
        assert!(player.display_name.is_none());
    }
}
