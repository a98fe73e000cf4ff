use serde::Deserialize;

/// One entry in a player's game list as returned by the Steam
/// IPlayerService endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerGame {
    pub appid: u64,

    /// Total recorded minutes across all platforms.
    #[serde(default)]
    pub playtime_forever: u64,

    /// Present when extended app info was requested.
    #[serde(default)]
    pub name: Option<String>,
}

/// Outer envelope for `GetRecentlyPlayedGames` and `GetOwnedGames`.
///
/// Steam omits the `games` field entirely for private or empty profiles,
/// so it stays `Option` to keep "no data" distinguishable from an empty
/// list at deserialization time.
#[derive(Debug, Deserialize)]
pub struct PlayerGamesEnvelope {
    #[serde(default)]
    pub response: PlayerGamesBody,
}

#[derive(Debug, Default, Deserialize)]
pub struct PlayerGamesBody {
    #[serde(default)]
    pub games: Option<Vec<PlayerGame>>,
}

impl PlayerGamesEnvelope {
    /// The game list, or `None` when the response carried no data.
    pub fn into_games(self) -> Option<Vec<PlayerGame>> {
        match self.response.games {
            Some(games) if !games.is_empty() => Some(games),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_with_games() {
        let json = r#"{"response":{"total_count":2,"games":[
            {"appid":393380,"playtime_forever":90},
            {"appid":730,"playtime_forever":0,"name":"Counter-Strike 2"}
        ]}}"#;
        let envelope: PlayerGamesEnvelope = serde_json::from_str(json).unwrap();
        let games = envelope.into_games().unwrap();
        assert_eq!(games.len(), 2);
        assert_eq!(games[0].appid, 393380);
        assert_eq!(games[0].playtime_forever, 90);
        assert_eq!(games[1].name.as_deref(), Some("Counter-Strike 2"));
    }

    #[test]
    fn test_envelope_without_games_field() {
        let json = r#"{"response":{}}"#;
        let envelope: PlayerGamesEnvelope = serde_json::from_str(json).unwrap();
        assert!(envelope.into_games().is_none());
    }

    #[test]
    fn test_envelope_with_empty_list() {
        let json = r#"{"response":{"games":[]}}"#;
        let envelope: PlayerGamesEnvelope = serde_json::from_str(json).unwrap();
        assert!(envelope.into_games().is_none());
    }
}
