use cineview_model::{Review, WatchlistEntry};

use crate::common::messages::Fetched;

/// Profile page messages
#[derive(Clone, Debug)]
pub enum Message {
    /// Fetch the user's reviews and watchlist
    Load,
    MyReviewsLoaded(Fetched<Vec<Review>>),
    WatchlistLoaded(Fetched<Vec<WatchlistEntry>>),
    /// Remove a review from the profile list
    DeleteReview(i64),
    ReviewDeleted {
        review_id: i64,
        result: Fetched<()>,
    },
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Load => "Load",
            Self::MyReviewsLoaded(_) => "MyReviewsLoaded",
            Self::WatchlistLoaded(_) => "WatchlistLoaded",
            Self::DeleteReview(_) => "DeleteReview",
            Self::ReviewDeleted { .. } => "ReviewDeleted",
        }
    }
}
