pub mod steam;

use async_trait::async_trait;
use std::sync::Arc;

use crate::core::PlayerGame;
use crate::error::Result;

pub use steam::{SteamEndpoint, SteamProvider};

/// Trait for upstream player-game-list sources.
///
/// One call fetches the player's whole game list; the engine filters for
/// the requested game locally. The three outcomes the engine cares about:
/// - `Err(_)` — transport failure (network error, timeout, non-2xx, bad JSON)
/// - `Ok(None)` — call succeeded but carried no game data
/// - `Ok(Some(games))` — the player's game list
#[async_trait]
pub trait PlayerGamesProvider: Send + Sync {
    /// Fetch the full (game, playtime) list for a player.
    async fn player_games(&self, player_id: &str) -> Result<Option<Vec<PlayerGame>>>;

    /// Get source name (used to prefix diagnostics)
    fn name(&self) -> &str;
}

/// Build the fixed Steam source list for an API key.
///
/// Order is significant and must not be changed: recent-activity data is
/// preferred over the full library scan.
pub fn steam_sources(api_key: &str) -> Vec<Arc<dyn PlayerGamesProvider>> {
    vec![
        Arc::new(SteamProvider::new(SteamEndpoint::RecentlyPlayed, api_key)),
        Arc::new(SteamProvider::new(SteamEndpoint::OwnedGames, api_key)),
    ]
}
