use std::sync::Arc;

use crate::cache::{MemoryCache, PlaytimeCache};
use crate::core::playtime::minutes_to_hours;
use crate::core::{PlayerGame, PlaytimeResult, TIME_IS_UNKNOWN};
use crate::providers::{steam_sources, PlayerGamesProvider};

/// Playtime resolver orchestrator.
///
/// Walks its source list in priority order, normalizes each answer, and
/// caches the outcome. [`PlaytimeEngine::lookup`] is total: it always
/// returns a well-formed [`PlaytimeResult`], never an error.
pub struct PlaytimeEngine {
    cache: Arc<dyn PlaytimeCache>,
    sources: Vec<Arc<dyn PlayerGamesProvider>>,
}

impl PlaytimeEngine {
    /// Create an engine wired to the two Steam endpoints, with a fresh
    /// in-memory cache.
    pub fn new(api_key: &str) -> Self {
        Self {
            cache: Arc::new(MemoryCache::new()),
            sources: steam_sources(api_key),
        }
    }

    /// Create an engine from injected parts. The source order is the
    /// fallback priority order.
    pub fn with_parts(
        cache: Arc<dyn PlaytimeCache>,
        sources: Vec<Arc<dyn PlayerGamesProvider>>,
    ) -> Self {
        Self { cache, sources }
    }

    /// Resolve a player's playtime in a game, in hours.
    ///
    /// Checks the cache first unless `ignore_cache` is set, then tries each
    /// source in order, stopping at the first definitive answer. When every
    /// source comes up empty the sentinel is cached too, so later lookups
    /// for the same key stay local.
    pub async fn lookup(&self, player_id: &str, game_id: &str, ignore_cache: bool) -> PlaytimeResult {
        if !ignore_cache {
            if let Some(cached) = self.cache.get(game_id, player_id) {
                tracing::debug!(player_id, game_id, playtime = cached, "cache hit");
                return PlaytimeResult {
                    playtime: cached,
                    errors: Vec::new(),
                };
            }
        }

        let mut errors = Vec::new();

        for source in &self.sources {
            let result = self.playtime_from_source(source.as_ref(), player_id, game_id).await;

            if result.is_unknown() {
                tracing::warn!(
                    source = source.name(),
                    player_id,
                    game_id,
                    "source yielded no playtime"
                );
                errors.extend(
                    result
                        .errors
                        .into_iter()
                        .map(|error| format!("{}: {}", source.name(), error)),
                );
                continue;
            }

            tracing::debug!(
                source = source.name(),
                player_id,
                game_id,
                playtime = result.playtime,
                "source resolved playtime"
            );
            self.cache.put(game_id, player_id, result.playtime);
            return result;
        }

        self.cache.put(game_id, player_id, TIME_IS_UNKNOWN);
        PlaytimeResult::unknown_with(errors)
    }

    /// Query one source and normalize its response for the target game.
    async fn playtime_from_source(
        &self,
        source: &dyn PlayerGamesProvider,
        player_id: &str,
        game_id: &str,
    ) -> PlaytimeResult {
        let games = match source.player_games(player_id).await {
            Ok(games) => games,
            Err(e) => {
                return PlaytimeResult::unknown(format!(
                    "Player {} is {} because their time request returned the error {}",
                    player_id, TIME_IS_UNKNOWN, e
                ));
            }
        };

        let Some(games) = games else {
            return PlaytimeResult::unknown(format!(
                "Player {} is {} because their games response was empty",
                player_id, TIME_IS_UNKNOWN
            ));
        };

        let minutes = match find_game_minutes(&games, game_id) {
            Some(minutes) => minutes,
            None => {
                return PlaytimeResult::unknown(format!(
                    "Player {} is {} because the game was not found on their account",
                    player_id, TIME_IS_UNKNOWN
                ));
            }
        };

        // Zero recorded minutes is indistinguishable from "unplayed", so it
        // is reported as unknown rather than as a measured value.
        if minutes == 0 {
            return PlaytimeResult::unknown(format!(
                "Player {} is {}, because their minutes in the game == 0",
                player_id, TIME_IS_UNKNOWN
            ));
        }

        PlaytimeResult::known(minutes_to_hours(minutes))
    }
}

fn find_game_minutes(games: &[PlayerGame], game_id: &str) -> Option<u64> {
    games
        .iter()
        .find(|game| game.appid.to_string() == game_id)
        .map(|game| game.playtime_forever)
}
