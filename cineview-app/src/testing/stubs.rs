//! Programmable in-memory stand-in for the catalog server.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use cineview_client::{ApiError, ApiResult, CatalogApi, FilterPage};
use cineview_model::{
    CreateReviewRequest, FilterOptions, FilterRequest, LoginRequest,
    RegisterRequest, Review, TitleDetail, TitleDetailBody, TitleSearchHit,
    TitleSummary, User, WatchlistEntry, WatchlistStatus,
};

/// How a scripted endpoint should answer.
#[derive(Debug, Clone)]
struct Scripted<T> {
    delay: Option<Duration>,
    outcome: Result<T, StubFailure>,
}

impl<T> Scripted<T> {
    fn ok(value: T) -> Self {
        Self {
            delay: None,
            outcome: Ok(value),
        }
    }
}

#[derive(Debug, Clone)]
enum StubFailure {
    Unauthorized,
    Rejected(String),
}

impl From<StubFailure> for ApiError {
    fn from(failure: StubFailure) -> Self {
        match failure {
            StubFailure::Unauthorized => ApiError::Unauthorized,
            StubFailure::Rejected(message) => ApiError::Rejected(message),
        }
    }
}

/// Deterministic search hits derived from a query.
pub fn search_hits(query: &str, count: usize) -> Vec<TitleSearchHit> {
    (1..=count)
        .map(|index| TitleSearchHit {
            title_id: format!("{query}-{index}"),
            name: format!("{query} hit {index}"),
            overview: Some(format!("Overview of {query} hit {index}")),
            vote_average: 7.0,
        })
        .collect()
}

/// A plain viewer account with fixed timestamps.
pub fn sample_user(role: &str) -> User {
    User {
        user_id: 42,
        username: "moviegoer".to_string(),
        email: "fan@example.com".to_string(),
        full_name: "Pat Moviegoer".to_string(),
        role_name: role.to_string(),
        is_active: true,
        created_at: Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap(),
    }
}

fn found_detail(title_id: &str) -> TitleDetail {
    TitleDetail {
        detail: Some(TitleDetailBody {
            title_id: title_id.to_string(),
            name: format!("Title {title_id}"),
            overview: Some("A stubbed title".to_string()),
            vote_average: 7.5,
            vote_count: 1200,
            ..TitleDetailBody::default()
        }),
        ..TitleDetail::default()
    }
}

/// Programmable [`CatalogApi`] implementation. Every call is appended to
/// an inspectable log; endpoints answer from scripts when present and
/// from benign defaults otherwise.
pub struct StubCatalogApi {
    calls: Mutex<Vec<String>>,
    trending: Mutex<Vec<TitleSummary>>,
    top_rated: Mutex<Vec<TitleSummary>>,
    search: Mutex<HashMap<String, Scripted<Vec<TitleSearchHit>>>>,
    options: Mutex<FilterOptions>,
    filter_pages: Mutex<VecDeque<Scripted<FilterPage>>>,
    details: Mutex<HashMap<String, Scripted<TitleDetail>>>,
    profile: Mutex<Scripted<User>>,
    login: Mutex<Scripted<User>>,
    reviews: Mutex<HashMap<String, Vec<Review>>>,
    my_reviews: Mutex<HashMap<String, Review>>,
    watchlist_entries: Mutex<Vec<WatchlistEntry>>,
    watchlist_status: Mutex<Scripted<WatchlistStatus>>,
}

impl std::fmt::Debug for StubCatalogApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StubCatalogApi").finish_non_exhaustive()
    }
}

impl Default for StubCatalogApi {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            trending: Mutex::new(Vec::new()),
            top_rated: Mutex::new(Vec::new()),
            search: Mutex::new(HashMap::new()),
            options: Mutex::new(FilterOptions::default()),
            filter_pages: Mutex::new(VecDeque::new()),
            details: Mutex::new(HashMap::new()),
            // An anonymous visitor until a test says otherwise.
            profile: Mutex::new(Scripted {
                delay: None,
                outcome: Err(StubFailure::Unauthorized),
            }),
            login: Mutex::new(Scripted {
                delay: None,
                outcome: Err(StubFailure::Rejected(
                    "Invalid credentials".to_string(),
                )),
            }),
            reviews: Mutex::new(HashMap::new()),
            my_reviews: Mutex::new(HashMap::new()),
            watchlist_entries: Mutex::new(Vec::new()),
            watchlist_status: Mutex::new(Scripted::ok(WatchlistStatus {
                in_watchlist: false,
            })),
        }
    }
}

impl StubCatalogApi {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, call: String) {
        self.calls.lock().expect("call log poisoned").push(call);
    }

    /// The full call log, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("call log poisoned").clone()
    }

    /// Calls whose log entry starts with `prefix`.
    pub fn calls_matching(&self, prefix: &str) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|call| call.starts_with(prefix))
            .collect()
    }

    // --- scripting -------------------------------------------------------

    pub fn set_trending(&self, titles: Vec<TitleSummary>) {
        *self.trending.lock().expect("stub lock poisoned") = titles;
    }

    pub fn set_top_rated(&self, titles: Vec<TitleSummary>) {
        *self.top_rated.lock().expect("stub lock poisoned") = titles;
    }

    pub fn set_search_hits(&self, query: &str, hits: Vec<TitleSearchHit>) {
        self.search
            .lock()
            .expect("stub lock poisoned")
            .insert(query.to_string(), Scripted::ok(hits));
    }

    /// Delay the response for `query`, keeping whatever outcome is
    /// already scripted (or the derived default).
    pub fn delay_search(&self, query: &str, delay: Duration) {
        let mut search = self.search.lock().expect("stub lock poisoned");
        let entry = search
            .entry(query.to_string())
            .or_insert_with(|| Scripted::ok(search_hits(query, 8)));
        entry.delay = Some(delay);
    }

    pub fn fail_search(&self, query: &str, message: &str) {
        self.search.lock().expect("stub lock poisoned").insert(
            query.to_string(),
            Scripted {
                delay: None,
                outcome: Err(StubFailure::Rejected(message.to_string())),
            },
        );
    }

    pub fn fail_search_unauthorized(&self, query: &str) {
        self.search.lock().expect("stub lock poisoned").insert(
            query.to_string(),
            Scripted {
                delay: None,
                outcome: Err(StubFailure::Unauthorized),
            },
        );
    }

    pub fn set_filter_options(&self, options: FilterOptions) {
        *self.options.lock().expect("stub lock poisoned") = options;
    }

    /// Queue the next filter response. Responses are consumed in order;
    /// an empty queue answers with an empty page.
    pub fn push_filter_page(&self, page: FilterPage) {
        self.filter_pages
            .lock()
            .expect("stub lock poisoned")
            .push_back(Scripted::ok(page));
    }

    pub fn push_delayed_filter_page(&self, page: FilterPage, delay: Duration) {
        self.filter_pages
            .lock()
            .expect("stub lock poisoned")
            .push_back(Scripted {
                delay: Some(delay),
                outcome: Ok(page),
            });
    }

    pub fn push_filter_failure(&self, message: &str) {
        self.filter_pages
            .lock()
            .expect("stub lock poisoned")
            .push_back(Scripted {
                delay: None,
                outcome: Err(StubFailure::Rejected(message.to_string())),
            });
    }

    pub fn set_detail(&self, title_id: &str, detail: TitleDetail) {
        self.details
            .lock()
            .expect("stub lock poisoned")
            .insert(title_id.to_string(), Scripted::ok(detail));
    }

    pub fn delay_detail(&self, title_id: &str, delay: Duration) {
        let mut details = self.details.lock().expect("stub lock poisoned");
        let entry = details
            .entry(title_id.to_string())
            .or_insert_with(|| Scripted::ok(found_detail(title_id)));
        entry.delay = Some(delay);
    }

    pub fn set_profile(&self, user: User) {
        *self.profile.lock().expect("stub lock poisoned") = Scripted::ok(user);
    }

    pub fn set_profile_unauthorized(&self) {
        *self.profile.lock().expect("stub lock poisoned") = Scripted {
            delay: None,
            outcome: Err(StubFailure::Unauthorized),
        };
    }

    pub fn set_login_user(&self, user: User) {
        *self.login.lock().expect("stub lock poisoned") = Scripted::ok(user);
    }

    pub fn set_reviews(&self, title_id: &str, reviews: Vec<Review>) {
        self.reviews
            .lock()
            .expect("stub lock poisoned")
            .insert(title_id.to_string(), reviews);
    }

    pub fn set_watchlist(&self, entries: Vec<WatchlistEntry>) {
        *self.watchlist_entries.lock().expect("stub lock poisoned") = entries;
    }

    pub fn fail_watchlist_status(&self, message: &str) {
        *self.watchlist_status.lock().expect("stub lock poisoned") = Scripted {
            delay: None,
            outcome: Err(StubFailure::Rejected(message.to_string())),
        };
    }

    async fn resolve<T: Clone>(&self, scripted: Scripted<T>) -> ApiResult<T> {
        if let Some(delay) = scripted.delay {
            tokio::time::sleep(delay).await;
        }
        scripted.outcome.map_err(ApiError::from)
    }
}

#[async_trait]
impl CatalogApi for StubCatalogApi {
    async fn trending(&self, limit: u32) -> ApiResult<Vec<TitleSummary>> {
        self.record(format!("trending limit={limit}"));
        Ok(self.trending.lock().expect("stub lock poisoned").clone())
    }

    async fn top_rated(&self, limit: u32) -> ApiResult<Vec<TitleSummary>> {
        self.record(format!("top_rated limit={limit}"));
        Ok(self.top_rated.lock().expect("stub lock poisoned").clone())
    }

    async fn search_titles(&self, query: &str) -> ApiResult<Vec<TitleSearchHit>> {
        self.record(format!("search q={query}"));
        let scripted = self
            .search
            .lock()
            .expect("stub lock poisoned")
            .get(query)
            .cloned()
            .unwrap_or_else(|| Scripted::ok(search_hits(query, 8)));
        self.resolve(scripted).await
    }

    async fn filter_options(&self) -> ApiResult<FilterOptions> {
        self.record("filter_options".to_string());
        Ok(self.options.lock().expect("stub lock poisoned").clone())
    }

    async fn filter_titles(&self, request: &FilterRequest) -> ApiResult<FilterPage> {
        self.record(format!(
            "filter page={} body={}",
            request.page,
            serde_json::to_string(request).expect("filter request serializes"),
        ));
        let scripted = self
            .filter_pages
            .lock()
            .expect("stub lock poisoned")
            .pop_front()
            .unwrap_or_else(|| {
                Scripted::ok(FilterPage {
                    titles: Vec::new(),
                    count: 0,
                })
            });
        self.resolve(scripted).await
    }

    async fn title_detail(&self, title_id: &str) -> ApiResult<TitleDetail> {
        self.record(format!("detail id={title_id}"));
        let scripted = self
            .details
            .lock()
            .expect("stub lock poisoned")
            .get(title_id)
            .cloned()
            .unwrap_or_else(|| Scripted::ok(found_detail(title_id)));
        self.resolve(scripted).await
    }

    async fn register(&self, request: &RegisterRequest) -> ApiResult<User> {
        self.record(format!("register username={}", request.username));
        Ok(User {
            username: request.username.clone(),
            email: request.email.clone(),
            full_name: request.full_name.clone(),
            ..sample_user("user")
        })
    }

    async fn login(&self, request: &LoginRequest) -> ApiResult<User> {
        self.record(format!("login username={}", request.username));
        let scripted = self.login.lock().expect("stub lock poisoned").clone();
        self.resolve(scripted).await
    }

    async fn profile(&self) -> ApiResult<User> {
        self.record("profile".to_string());
        let scripted = self.profile.lock().expect("stub lock poisoned").clone();
        self.resolve(scripted).await
    }

    async fn logout(&self) -> ApiResult<()> {
        self.record("logout".to_string());
        Ok(())
    }

    async fn reviews_for_title(&self, title_id: &str) -> ApiResult<Vec<Review>> {
        self.record(format!("reviews id={title_id}"));
        Ok(self
            .reviews
            .lock()
            .expect("stub lock poisoned")
            .get(title_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn my_reviews(&self) -> ApiResult<Vec<Review>> {
        self.record("my_reviews".to_string());
        Ok(self
            .my_reviews
            .lock()
            .expect("stub lock poisoned")
            .values()
            .cloned()
            .collect())
    }

    async fn my_review_for_title(&self, title_id: &str) -> ApiResult<Option<Review>> {
        self.record(format!("my_review id={title_id}"));
        Ok(self
            .my_reviews
            .lock()
            .expect("stub lock poisoned")
            .get(title_id)
            .cloned())
    }

    async fn save_review(&self, request: &CreateReviewRequest) -> ApiResult<Review> {
        self.record(format!("save_review id={}", request.title_id));
        let user = sample_user("user");
        let review = Review {
            review_id: 1,
            user_id: user.user_id,
            username: user.username,
            title_id: request.title_id.clone(),
            rating: request.rating,
            review_text: request.review_text.clone(),
            created_at: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
        };
        self.my_reviews
            .lock()
            .expect("stub lock poisoned")
            .insert(request.title_id.clone(), review.clone());
        Ok(review)
    }

    async fn delete_review(&self, review_id: i64) -> ApiResult<()> {
        self.record(format!("delete_review id={review_id}"));
        self.my_reviews
            .lock()
            .expect("stub lock poisoned")
            .retain(|_, review| review.review_id != review_id);
        Ok(())
    }

    async fn watchlist(&self) -> ApiResult<Vec<WatchlistEntry>> {
        self.record("watchlist".to_string());
        Ok(self
            .watchlist_entries
            .lock()
            .expect("stub lock poisoned")
            .clone())
    }

    async fn watchlist_status(&self, title_id: &str) -> ApiResult<WatchlistStatus> {
        self.record(format!("watchlist_status id={title_id}"));
        let scripted = self
            .watchlist_status
            .lock()
            .expect("stub lock poisoned")
            .clone();
        self.resolve(scripted).await
    }

    async fn add_to_watchlist(&self, title_id: &str) -> ApiResult<()> {
        self.record(format!("watchlist_add id={title_id}"));
        Ok(())
    }

    async fn remove_from_watchlist(&self, title_id: &str) -> ApiResult<()> {
        self.record(format!("watchlist_remove id={title_id}"));
        Ok(())
    }
}
