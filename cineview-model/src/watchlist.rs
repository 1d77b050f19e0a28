use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of the user's watchlist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchlistEntry {
    pub title_id: String,
    pub name: String,
    #[serde(default)]
    pub start_year: Option<i32>,
    pub vote_average: f64,
    pub added_at: DateTime<Utc>,
}

/// Membership answer from the watchlist status endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchlistStatus {
    pub in_watchlist: bool,
}
