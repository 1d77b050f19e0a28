//! Detail domain types

use std::time::Duration;

use cineview_model::{Review, TitleDetail};

/// Hard cap on the detail fetch before the page gives up.
pub const DETAIL_TIMEOUT: Duration = Duration::from_secs(15);

/// What we know about this title's watchlist membership.
///
/// The status probe is best-effort; until (and unless) it answers, the
/// button renders its default state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WatchlistMembership {
    #[default]
    Unknown,
    In,
    Out,
}

/// Detail domain state
#[derive(Debug, Clone, Default)]
pub struct DetailState {
    /// Id of the title this page is for. Responses for any other id are
    /// stale and dropped.
    pub requested_id: Option<String>,
    pub detail: Option<TitleDetail>,
    pub loading: bool,
    pub error: Option<String>,
    /// The search query that led here, if any; drives the Back control.
    pub origin_query: Option<String>,

    // Reviews
    pub reviews: Vec<Review>,
    pub my_review: Option<Review>,
    pub review_error: Option<String>,
    pub saving_review: bool,

    // Watchlist
    pub watchlist: WatchlistMembership,
    pub watchlist_busy: bool,
}

impl DetailState {
    /// Fresh state for a new title visit.
    pub fn for_title(title_id: String, origin_query: Option<String>) -> Self {
        Self {
            requested_id: Some(title_id),
            loading: true,
            origin_query,
            ..Self::default()
        }
    }

    pub fn is_current(&self, title_id: &str) -> bool {
        self.requested_id.as_deref() == Some(title_id)
    }
}
