//! Title detail domain: the detail payload, its reviews, and the
//! watchlist button. Shallow by design — no state machine beyond the
//! stale-guarded fetches and the search-aware Back control.

pub mod messages;
pub mod types;
pub mod update;

pub use self::messages::Message;
pub use self::types::{DetailState, WatchlistMembership, DETAIL_TIMEOUT};
pub use self::update::update;
