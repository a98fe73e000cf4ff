pub mod playtime;
pub mod steam_games;

pub use playtime::{PlaytimeResult, TIME_IS_UNKNOWN};
pub use steam_games::{PlayerGame, PlayerGamesEnvelope};
