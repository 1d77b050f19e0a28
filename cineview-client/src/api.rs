//! The typed API surface consumed by application domains.

use async_trait::async_trait;
use cineview_model::{
    CreateReviewRequest, FilterOptions, FilterRequest, FilteredTitle,
    LoginRequest, RegisterRequest, Review, TitleDetail, TitleSearchHit,
    TitleSummary, User, WatchlistEntry, WatchlistStatus,
};
use serde_json::json;

use crate::client::ApiClient;
use crate::error::ApiResult;

/// One page of faceted filter results.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterPage {
    pub titles: Vec<FilteredTitle>,
    /// Total matches across all pages, not the page length.
    pub count: u64,
}

/// Catalog server operations.
///
/// Domains hold this as `Arc<dyn CatalogApi>`; the integration suite
/// substitutes a programmable stub at the same seam.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn trending(&self, limit: u32) -> ApiResult<Vec<TitleSummary>>;
    async fn top_rated(&self, limit: u32) -> ApiResult<Vec<TitleSummary>>;

    /// Type-ahead search. The server decides how many hits to return;
    /// the suggestion dropdown truncates client-side.
    async fn search_titles(&self, query: &str) -> ApiResult<Vec<TitleSearchHit>>;

    async fn filter_options(&self) -> ApiResult<FilterOptions>;
    async fn filter_titles(&self, request: &FilterRequest) -> ApiResult<FilterPage>;

    async fn title_detail(&self, title_id: &str) -> ApiResult<TitleDetail>;

    async fn register(&self, request: &RegisterRequest) -> ApiResult<User>;
    async fn login(&self, request: &LoginRequest) -> ApiResult<User>;
    async fn profile(&self) -> ApiResult<User>;
    async fn logout(&self) -> ApiResult<()>;

    async fn reviews_for_title(&self, title_id: &str) -> ApiResult<Vec<Review>>;
    async fn my_reviews(&self) -> ApiResult<Vec<Review>>;
    /// The current user's review of a title, if any.
    async fn my_review_for_title(&self, title_id: &str) -> ApiResult<Option<Review>>;
    async fn save_review(&self, request: &CreateReviewRequest) -> ApiResult<Review>;
    async fn delete_review(&self, review_id: i64) -> ApiResult<()>;

    async fn watchlist(&self) -> ApiResult<Vec<WatchlistEntry>>;
    async fn watchlist_status(&self, title_id: &str) -> ApiResult<WatchlistStatus>;
    async fn add_to_watchlist(&self, title_id: &str) -> ApiResult<()>;
    async fn remove_from_watchlist(&self, title_id: &str) -> ApiResult<()>;
}

#[async_trait]
impl CatalogApi for ApiClient {
    async fn trending(&self, limit: u32) -> ApiResult<Vec<TitleSummary>> {
        self.get_data_with_query("/titles/trending", &[("limit", limit)])
            .await
    }

    async fn top_rated(&self, limit: u32) -> ApiResult<Vec<TitleSummary>> {
        self.get_data_with_query("/titles/top-rated", &[("limit", limit)])
            .await
    }

    async fn search_titles(&self, query: &str) -> ApiResult<Vec<TitleSearchHit>> {
        self.get_data_with_query("/titles/search", &[("q", query)])
            .await
    }

    async fn filter_options(&self) -> ApiResult<FilterOptions> {
        self.get_data("/titles/filter-options").await
    }

    async fn filter_titles(&self, request: &FilterRequest) -> ApiResult<FilterPage> {
        let (titles, count) = self.post_page("/titles/filter", request).await?;
        Ok(FilterPage { titles, count })
    }

    async fn title_detail(&self, title_id: &str) -> ApiResult<TitleDetail> {
        self.get_data(&format!("/titles/{title_id}/detail")).await
    }

    async fn register(&self, request: &RegisterRequest) -> ApiResult<User> {
        self.post_data("/auth/register", request).await
    }

    async fn login(&self, request: &LoginRequest) -> ApiResult<User> {
        self.post_data("/auth/login", request).await
    }

    async fn profile(&self) -> ApiResult<User> {
        self.get_data("/auth/profile").await
    }

    async fn logout(&self) -> ApiResult<()> {
        self.post_unit("/auth/logout", &json!({})).await
    }

    async fn reviews_for_title(&self, title_id: &str) -> ApiResult<Vec<Review>> {
        self.get_data(&format!("/reviews/{title_id}")).await
    }

    async fn my_reviews(&self) -> ApiResult<Vec<Review>> {
        self.get_data("/reviews/user").await
    }

    async fn my_review_for_title(&self, title_id: &str) -> ApiResult<Option<Review>> {
        self.get_optional_data(&format!("/reviews/check/{title_id}"))
            .await
    }

    async fn save_review(&self, request: &CreateReviewRequest) -> ApiResult<Review> {
        self.post_data("/reviews", request).await
    }

    async fn delete_review(&self, review_id: i64) -> ApiResult<()> {
        self.delete_unit(&format!("/reviews/{review_id}")).await
    }

    async fn watchlist(&self) -> ApiResult<Vec<WatchlistEntry>> {
        self.get_data("/watchlist").await
    }

    async fn watchlist_status(&self, title_id: &str) -> ApiResult<WatchlistStatus> {
        self.get_data(&format!("/watchlist/status/{title_id}")).await
    }

    async fn add_to_watchlist(&self, title_id: &str) -> ApiResult<()> {
        self.post_unit("/watchlist", &json!({ "title_id": title_id }))
            .await
    }

    async fn remove_from_watchlist(&self, title_id: &str) -> ApiResult<()> {
        self.delete_unit(&format!("/watchlist/{title_id}")).await
    }
}
