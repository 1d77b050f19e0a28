//! Detail page: stale-id discard, timeout, not-found handling, reviews,
//! and the best-effort watchlist probe.

mod common;

use std::sync::Arc;
use std::time::Duration;

use cineview_app::domains::detail::{self, WatchlistMembership};
use cineview_app::domains::navigation::Route;
use cineview_app::testing::StubCatalogApi;
use cineview_app::AppMessage;
use cineview_model::TitleDetail;
use common::{app_with, go, signed_in_app};

#[tokio::test(start_paused = true)]
async fn a_slow_response_for_a_left_behind_title_is_ignored() {
    let stub = Arc::new(StubCatalogApi::new());
    stub.delay_detail("slow", Duration::from_millis(400));
    let mut app = app_with(&stub);

    app.dispatch(go(Route::TitleDetail("slow".to_string())));
    // The first page's fetch goes out...
    assert!(app.step().await);
    // ...and the user moves on before it lands.
    app.dispatch(go(Route::TitleDetail("fast".to_string())));
    app.run_until_idle().await;

    let state = &app.state().domains.detail;
    assert_eq!(state.requested_id.as_deref(), Some("fast"));
    let body = state.detail.as_ref().and_then(|d| d.detail.as_ref());
    assert_eq!(body.map(|b| b.name.as_str()), Some("Title fast"));
}

#[tokio::test(start_paused = true)]
async fn the_detail_fetch_gives_up_after_fifteen_seconds() {
    let stub = Arc::new(StubCatalogApi::new());
    stub.delay_detail("glacial", Duration::from_secs(20));
    let mut app = app_with(&stub);

    app.dispatch(go(Route::TitleDetail("glacial".to_string())));
    app.run_until_idle().await;

    let state = &app.state().domains.detail;
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("Request timed out"));
}

#[tokio::test(start_paused = true)]
async fn an_unknown_id_is_not_found_rather_than_a_transport_error() {
    let stub = Arc::new(StubCatalogApi::new());
    // Successful envelope, but no detail record inside.
    stub.set_detail("ghost", TitleDetail::default());
    let mut app = app_with(&stub);

    app.dispatch(go(Route::TitleDetail("ghost".to_string())));
    app.run_until_idle().await;

    let state = &app.state().domains.detail;
    assert_eq!(state.error.as_deref(), Some("Title not found"));
    assert!(state.detail.is_none());
}

#[tokio::test(start_paused = true)]
async fn watchlist_probe_failure_leaves_the_button_in_its_default_state() {
    let stub = Arc::new(StubCatalogApi::new());
    stub.fail_watchlist_status("status check broke");
    let mut app = signed_in_app(&stub, "user").await;

    app.dispatch(go(Route::TitleDetail("t1".to_string())));
    app.run_until_idle().await;

    let state = &app.state().domains.detail;
    assert_eq!(state.watchlist, WatchlistMembership::Unknown);
    assert!(
        state.error.is_none(),
        "a best-effort probe failing must not break the page"
    );
    assert!(state.detail.is_some());
}

#[tokio::test(start_paused = true)]
async fn anonymous_visitors_skip_the_per_user_probes() {
    let stub = Arc::new(StubCatalogApi::new());
    let mut app = app_with(&stub);

    app.dispatch(go(Route::TitleDetail("t1".to_string())));
    app.run_until_idle().await;

    assert!(stub.calls_matching("my_review").is_empty());
    assert!(stub.calls_matching("watchlist_status").is_empty());
    assert_eq!(stub.calls_matching("reviews").len(), 1);
}

#[tokio::test(start_paused = true)]
async fn toggling_the_watchlist_round_trips_membership() {
    let stub = Arc::new(StubCatalogApi::new());
    let mut app = signed_in_app(&stub, "user").await;

    app.dispatch(go(Route::TitleDetail("t1".to_string())));
    app.run_until_idle().await;
    assert_eq!(
        app.state().domains.detail.watchlist,
        WatchlistMembership::Out
    );

    app.dispatch(AppMessage::Detail(detail::Message::ToggleWatchlist));
    app.run_until_idle().await;
    assert_eq!(app.state().domains.detail.watchlist, WatchlistMembership::In);
    assert_eq!(stub.calls_matching("watchlist_add").len(), 1);

    app.dispatch(AppMessage::Detail(detail::Message::ToggleWatchlist));
    app.run_until_idle().await;
    assert_eq!(
        app.state().domains.detail.watchlist,
        WatchlistMembership::Out
    );
    assert_eq!(stub.calls_matching("watchlist_remove").len(), 1);
}

#[tokio::test(start_paused = true)]
async fn review_submission_validates_then_saves_and_refreshes() {
    let stub = Arc::new(StubCatalogApi::new());
    let mut app = signed_in_app(&stub, "user").await;

    app.dispatch(go(Route::TitleDetail("t1".to_string())));
    app.run_until_idle().await;

    // Out-of-range rating never leaves the client.
    app.dispatch(AppMessage::Detail(detail::Message::SubmitReview {
        rating: 0,
        text: "meh".to_string(),
    }));
    app.run_until_idle().await;
    {
        let state = &app.state().domains.detail;
        assert_eq!(
            state.review_error.as_deref(),
            Some("Rating must be between 1 and 10")
        );
        assert!(stub.calls_matching("save_review").is_empty());
    }

    app.dispatch(AppMessage::Detail(detail::Message::SubmitReview {
        rating: 8,
        text: "Great pacing".to_string(),
    }));
    app.run_until_idle().await;

    let state = &app.state().domains.detail;
    assert!(state.review_error.is_none());
    assert_eq!(
        state.my_review.as_ref().map(|review| review.rating),
        Some(8)
    );
    // The rail is refreshed after a save.
    assert_eq!(stub.calls_matching("reviews id=t1").len(), 2);
}

#[tokio::test(start_paused = true)]
async fn deleting_the_own_review_clears_it() {
    let stub = Arc::new(StubCatalogApi::new());
    let mut app = signed_in_app(&stub, "user").await;

    app.dispatch(go(Route::TitleDetail("t1".to_string())));
    app.run_until_idle().await;
    app.dispatch(AppMessage::Detail(detail::Message::SubmitReview {
        rating: 8,
        text: "Great pacing".to_string(),
    }));
    app.run_until_idle().await;
    let review_id = app
        .state()
        .domains
        .detail
        .my_review
        .as_ref()
        .map(|review| review.review_id)
        .expect("review saved");

    app.dispatch(AppMessage::Detail(detail::Message::DeleteReview(review_id)));
    app.run_until_idle().await;

    assert!(app.state().domains.detail.my_review.is_none());
    assert_eq!(stub.calls_matching("delete_review").len(), 1);
}
