use std::collections::HashMap;
use std::sync::RwLock;

use crate::cache::PlaytimeCache;

/// In-memory playtime cache.
///
/// Session-scoped by design: nothing is persisted across restarts, and the
/// map is unbounded because the key space (games a process actually asks
/// about, per player) stays small in practice.
#[derive(Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<(String, String), f64>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }
}

impl PlaytimeCache for MemoryCache {
    fn get(&self, game_id: &str, player_id: &str) -> Option<f64> {
        self.entries
            .read()
            .unwrap()
            .get(&(game_id.to_string(), player_id.to_string()))
            .copied()
    }

    fn put(&self, game_id: &str, player_id: &str, playtime: f64) {
        self.entries
            .write()
            .unwrap()
            .insert((game_id.to_string(), player_id.to_string()), playtime);
    }
}
