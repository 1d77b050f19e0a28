use cineview_model::{Review, WatchlistEntry};

/// Profile page state
#[derive(Debug, Clone, Default)]
pub struct ProfileState {
    pub reviews: Vec<Review>,
    pub watchlist: Vec<WatchlistEntry>,
    pub reviews_loading: bool,
    pub watchlist_loading: bool,
    pub error: Option<String>,
}
