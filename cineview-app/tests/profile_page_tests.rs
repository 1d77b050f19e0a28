//! Profile page: the user's own reviews and watchlist.

mod common;

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use cineview_app::domains::navigation::Route;
use cineview_app::domains::profile;
use cineview_app::testing::StubCatalogApi;
use cineview_app::AppMessage;
use cineview_model::WatchlistEntry;
use common::{go, signed_in_app};

fn entry(title_id: &str) -> WatchlistEntry {
    WatchlistEntry {
        title_id: title_id.to_string(),
        name: format!("Title {title_id}"),
        start_year: Some(2020),
        vote_average: 7.1,
        added_at: Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap(),
    }
}

#[tokio::test(start_paused = true)]
async fn opening_the_profile_loads_reviews_and_watchlist() {
    let stub = Arc::new(StubCatalogApi::new());
    stub.set_watchlist(vec![entry("t1"), entry("t2")]);
    let mut app = signed_in_app(&stub, "user").await;

    app.dispatch(go(Route::Profile));
    app.run_until_idle().await;

    let state = &app.state().domains.profile;
    assert_eq!(state.watchlist.len(), 2);
    assert!(!state.reviews_loading);
    assert!(!state.watchlist_loading);
    assert_eq!(stub.calls_matching("my_reviews").len(), 1);
    assert_eq!(stub.calls_matching("watchlist").len(), 1);
}

#[tokio::test(start_paused = true)]
async fn deleting_a_review_removes_it_from_the_list() {
    let stub = Arc::new(StubCatalogApi::new());
    let mut app = signed_in_app(&stub, "user").await;

    // Seed a review through the normal save path.
    app.dispatch(go(Route::TitleDetail("t1".to_string())));
    app.run_until_idle().await;
    app.dispatch(AppMessage::Detail(
        cineview_app::domains::detail::Message::SubmitReview {
            rating: 7,
            text: "Solid".to_string(),
        },
    ));
    app.run_until_idle().await;

    app.dispatch(go(Route::Profile));
    app.run_until_idle().await;
    assert_eq!(app.state().domains.profile.reviews.len(), 1);
    let review_id = app.state().domains.profile.reviews[0].review_id;

    app.dispatch(AppMessage::Profile(profile::Message::DeleteReview(review_id)));
    app.run_until_idle().await;

    assert!(app.state().domains.profile.reviews.is_empty());
}
