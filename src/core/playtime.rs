use serde::{Deserialize, Serialize};

/// Sentinel playtime meaning "no definitive playtime could be determined".
///
/// Cached like any other value so that known-unresolvable keys do not
/// trigger repeat upstream scans.
pub const TIME_IS_UNKNOWN: f64 = -1.0;

/// Outcome of a playtime lookup.
///
/// `playtime` is a number of hours, or [`TIME_IS_UNKNOWN`]. `errors` carries
/// one source-prefixed diagnostic per failed source and is only non-empty
/// when `playtime` is the sentinel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaytimeResult {
    pub playtime: f64,
    #[serde(default)]
    pub errors: Vec<String>,
}

impl PlaytimeResult {
    /// A definitive playtime, in hours.
    pub fn known(hours: f64) -> Self {
        Self {
            playtime: hours,
            errors: Vec::new(),
        }
    }

    /// An unknown playtime with a single diagnostic message.
    pub fn unknown(error: impl Into<String>) -> Self {
        Self {
            playtime: TIME_IS_UNKNOWN,
            errors: vec![error.into()],
        }
    }

    /// An unknown playtime carrying accumulated diagnostics.
    pub fn unknown_with(errors: Vec<String>) -> Self {
        Self {
            playtime: TIME_IS_UNKNOWN,
            errors,
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.playtime == TIME_IS_UNKNOWN
    }
}

/// Convert upstream minutes to fractional hours.
pub fn minutes_to_hours(minutes: u64) -> f64 {
    minutes as f64 / 60.0
}
