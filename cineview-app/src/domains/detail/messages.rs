//! Detail domain messages

use cineview_model::{Review, TitleDetail, WatchlistStatus};

use crate::common::messages::Fetched;

/// Detail domain messages
#[derive(Clone, Debug)]
pub enum Message {
    // Page lifecycle
    /// Open the page for a title
    Load {
        title_id: String,
        origin_query: Option<String>,
    },
    /// Detail fetch settled for `title_id`
    Loaded {
        title_id: String,
        result: Fetched<TitleDetail>,
    },
    ReviewsLoaded {
        title_id: String,
        result: Fetched<Vec<Review>>,
    },
    MyReviewLoaded {
        title_id: String,
        result: Fetched<Option<Review>>,
    },
    WatchlistStatusLoaded {
        title_id: String,
        result: Fetched<WatchlistStatus>,
    },

    // User actions
    SubmitReview { rating: i32, text: String },
    ReviewSaved(Fetched<Review>),
    DeleteReview(i64),
    ReviewDeleted {
        review_id: i64,
        result: Fetched<()>,
    },
    ToggleWatchlist,
    WatchlistToggled {
        now_in: bool,
        result: Fetched<()>,
    },
    /// The page's Back control
    Back,
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Load { .. } => "Load",
            Self::Loaded { .. } => "Loaded",
            Self::ReviewsLoaded { .. } => "ReviewsLoaded",
            Self::MyReviewLoaded { .. } => "MyReviewLoaded",
            Self::WatchlistStatusLoaded { .. } => "WatchlistStatusLoaded",
            Self::SubmitReview { .. } => "SubmitReview",
            Self::ReviewSaved(_) => "ReviewSaved",
            Self::DeleteReview(_) => "DeleteReview",
            Self::ReviewDeleted { .. } => "ReviewDeleted",
            Self::ToggleWatchlist => "ToggleWatchlist",
            Self::WatchlistToggled { .. } => "WatchlistToggled",
            Self::Back => "Back",
        }
    }
}
