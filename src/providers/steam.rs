use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::core::{PlayerGame, PlayerGamesEnvelope};
use crate::error::{PlaytimeError, Result};
use crate::providers::PlayerGamesProvider;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// The two IPlayerService endpoints the resolver falls back across.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SteamEndpoint {
    RecentlyPlayed,
    OwnedGames,
}

impl SteamEndpoint {
    pub fn name(&self) -> &'static str {
        match self {
            SteamEndpoint::RecentlyPlayed => "GetRecentlyPlayedGames",
            SteamEndpoint::OwnedGames => "GetOwnedGames",
        }
    }

    fn url(&self) -> String {
        format!(
            "https://api.steampowered.com/IPlayerService/{}/v1/",
            self.name()
        )
    }
}

/// Steam Web API player-games source, bound to one endpoint.
pub struct SteamProvider {
    client: Client,
    endpoint: SteamEndpoint,
    api_key: String,
}

impl SteamProvider {
    /// Create a provider for one endpoint.
    pub fn new(endpoint: SteamEndpoint, api_key: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            endpoint,
            api_key: api_key.into(),
        }
    }

    async fn fetch(&self, player_id: &str) -> Result<PlayerGamesEnvelope> {
        let mut query: Vec<(&str, &str)> =
            vec![("key", self.api_key.as_str()), ("steamid", player_id)];
        // GetOwnedGames omits names unless extended app info is requested.
        if self.endpoint == SteamEndpoint::OwnedGames {
            query.push(("include_appinfo", "true"));
        }

        let response = self
            .client
            .get(self.endpoint.url())
            .query(&query)
            .send()
            .await
            .map_err(|e| PlaytimeError::Source {
                source_name: self.endpoint.name().to_string(),
                message: format!("Request failed: {}", e),
            })?;

        if !response.status().is_success() {
            return Err(PlaytimeError::Source {
                source_name: self.endpoint.name().to_string(),
                message: format!("HTTP {}", response.status()),
            });
        }

        response
            .json()
            .await
            .map_err(|e| PlaytimeError::Source {
                source_name: self.endpoint.name().to_string(),
                message: format!("Invalid JSON: {}", e),
            })
    }
}

#[async_trait]
impl PlayerGamesProvider for SteamProvider {
    async fn player_games(&self, player_id: &str) -> Result<Option<Vec<PlayerGame>>> {
        let envelope = self.fetch(player_id).await?;
        Ok(envelope.into_games())
    }

    fn name(&self) -> &str {
        self.endpoint.name()
    }
}
