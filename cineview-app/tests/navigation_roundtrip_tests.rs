//! The navigation state bridge: leaving a search for a detail page and
//! coming back to an intact result set, exactly once.

mod common;

use std::sync::Arc;

use cineview_app::domains::navigation::Route;
use cineview_app::domains::{detail, search};
use cineview_app::testing::StubCatalogApi;
use cineview_app::AppMessage;
use common::{app_with, commit_search, go};

#[tokio::test(start_paused = true)]
async fn back_from_detail_restores_the_committed_search() {
    let stub = Arc::new(StubCatalogApi::new());
    let mut app = app_with(&stub);

    commit_search(&mut app, "matrix").await;
    assert_eq!(stub.calls_matching("search").len(), 1);

    app.dispatch(AppMessage::Search(search::Message::OpenResult(
        "matrix-1".to_string(),
    )));
    app.run_until_idle().await;
    assert_eq!(
        app.state().domains.navigation.current,
        Route::TitleDetail("matrix-1".to_string())
    );

    app.dispatch(AppMessage::Detail(detail::Message::Back));
    app.run_until_idle().await;

    let domains = &app.state().domains;
    assert_eq!(domains.navigation.current, Route::Home);
    assert_eq!(domains.search.query, "matrix");
    assert!(domains.search.has_searched);
    assert_eq!(domains.search.results.len(), 8);
    assert!(
        !domains.search.show_suggestions,
        "restoration must not open the dropdown"
    );
    // One fetch for the submit, one to recompute the restored results;
    // no suggestion fetch anywhere.
    assert_eq!(stub.calls_matching("search").len(), 2);
}

#[tokio::test(start_paused = true)]
async fn restoration_suppresses_exactly_one_suggestion_cycle() {
    let stub = Arc::new(StubCatalogApi::new());
    let mut app = app_with(&stub);

    commit_search(&mut app, "matrix").await;
    app.dispatch(AppMessage::Search(search::Message::OpenResult(
        "matrix-1".to_string(),
    )));
    app.run_until_idle().await;
    app.dispatch(AppMessage::Detail(detail::Message::Back));
    app.run_until_idle().await;
    assert_eq!(stub.calls_matching("search").len(), 2);

    // The input control echoing the restored text consumes the one-shot
    // suppression without a fetch.
    app.dispatch(AppMessage::Search(search::Message::QueryChanged(
        "matrix".to_string(),
    )));
    app.run_until_idle().await;
    assert_eq!(stub.calls_matching("search").len(), 2);

    // The next real edit gets its suggestion cycle back.
    app.dispatch(AppMessage::Search(search::Message::QueryChanged(
        "matrix rel".to_string(),
    )));
    app.run_until_idle().await;
    assert_eq!(stub.calls_matching("search").len(), 3);
    assert!(app.state().domains.search.show_suggestions);
}

#[tokio::test(start_paused = true)]
async fn unrelated_navigation_clears_all_search_state() {
    let stub = Arc::new(StubCatalogApi::new());
    let mut app = app_with(&stub);

    commit_search(&mut app, "matrix").await;
    assert!(app.state().domains.search.has_searched);

    // Logo click: home without any navigation context.
    app.dispatch(go(Route::Home));
    app.run_until_idle().await;

    let state = &app.state().domains.search;
    assert_eq!(state.query, "");
    assert!(state.results.is_empty());
    assert!(!state.has_searched);
    assert!(state.committed_query.is_none());
}

#[tokio::test(start_paused = true)]
async fn back_from_a_direct_detail_visit_is_a_plain_pop() {
    let stub = Arc::new(StubCatalogApi::new());
    let mut app = app_with(&stub);

    app.dispatch(go(Route::FilterSearch));
    app.run_until_idle().await;
    // Direct visit: no search origin attached.
    app.dispatch(go(Route::TitleDetail("t9".to_string())));
    app.run_until_idle().await;
    assert!(app.state().domains.detail.origin_query.is_none());

    app.dispatch(AppMessage::Detail(detail::Message::Back));
    app.run_until_idle().await;

    assert_eq!(
        app.state().domains.navigation.current,
        Route::FilterSearch
    );
}

#[tokio::test(start_paused = true)]
async fn arriving_home_loads_both_rails() {
    let stub = Arc::new(StubCatalogApi::new());
    let mut app = app_with(&stub);

    app.dispatch(go(Route::Home));
    app.run_until_idle().await;

    assert_eq!(stub.calls_matching("trending"), vec!["trending limit=6"]);
    assert_eq!(stub.calls_matching("top_rated"), vec!["top_rated limit=6"]);
}
