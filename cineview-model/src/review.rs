use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user review of a title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub review_id: i64,
    pub user_id: i64,
    pub username: String,
    pub title_id: String,
    pub rating: i32,
    pub review_text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /reviews`. The server upserts: posting for a title the
/// user already reviewed replaces the earlier review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateReviewRequest {
    pub title_id: String,
    pub rating: i32,
    pub review_text: String,
}
