//! # Playtime Engine
//!
//! Steam playtime resolver with:
//! - Multi-endpoint fallback (recently played games, then owned games)
//! - Process-local in-memory caching, including negative results
//! - Total lookup contract: always a value, never a fault
//! - Async/await architecture
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use playtime_engine::PlaytimeEngine;
//!
//! #[tokio::main]
//! async fn main() {
//!     let engine = PlaytimeEngine::new("STEAM_API_KEY");
//!
//!     let result = engine.lookup("76561198000000001", "393380", false).await;
//!
//!     if result.is_unknown() {
//!         println!("No playtime found: {:?}", result.errors);
//!     } else {
//!         println!("Played {} hours", result.playtime);
//!     }
//! }
//! ```

pub mod cache;
pub mod core;
pub mod engine;
pub mod error;
pub mod providers;

// Re-export primary types
pub use cache::{MemoryCache, PlaytimeCache};
pub use core::{PlaytimeResult, TIME_IS_UNKNOWN};
pub use engine::PlaytimeEngine;
pub use error::{PlaytimeError, Result};
pub use providers::{steam_sources, PlayerGamesProvider, SteamProvider};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
