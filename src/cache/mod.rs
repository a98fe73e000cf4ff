pub mod memory;

pub use memory::MemoryCache;

/// Trait for playtime cache implementations.
///
/// Keys are the ordered pair (game id, player id). Entries live for the
/// whole process: no eviction, no expiry, last write wins. Implementations
/// must tolerate concurrent reads and writes but need no check-then-act
/// atomicity beyond that.
pub trait PlaytimeCache: Send + Sync {
    /// Get the cached playtime for (game, player), if any.
    fn get(&self, game_id: &str, player_id: &str) -> Option<f64>;

    /// Store a playtime (including the unknown sentinel) for (game, player).
    fn put(&self, game_id: &str, player_id: &str, playtime: f64);
}
