//! Faceted filter engine: request construction, phases, pagination, and
//! the submission-race discard.

mod common;

use std::sync::Arc;
use std::time::Duration;

use cineview_app::domains::filter::{self, FilterPhase};
use cineview_app::domains::navigation::Route;
use cineview_app::testing::StubCatalogApi;
use cineview_app::AppMessage;
use cineview_client::FilterPage;
use cineview_model::{FilteredTitle, SortKey};
use common::{app_with, go};

fn titles(count: usize) -> Vec<FilteredTitle> {
    (1..=count)
        .map(|index| FilteredTitle {
            title_id: format!("t{index}"),
            name: format!("Title {index}"),
            vote_average: 6.5,
            ..FilteredTitle::default()
        })
        .collect()
}

fn page(count: usize, total: u64) -> FilterPage {
    FilterPage {
        titles: titles(count),
        count: total,
    }
}

async fn open_filter_page(stub: &Arc<StubCatalogApi>) -> cineview_app::AppRuntime {
    let mut app = app_with(stub);
    app.dispatch(go(Route::FilterSearch));
    app.run_until_idle().await;
    app
}

#[tokio::test(start_paused = true)]
async fn options_are_fetched_once_per_mount_and_the_page_starts_idle() {
    let stub = Arc::new(StubCatalogApi::new());
    let app = open_filter_page(&stub).await;

    assert_eq!(stub.calls_matching("filter_options").len(), 1);
    let state = &app.state().domains.filter;
    assert_eq!(state.phase(), FilterPhase::Idle);
    assert!(state.options_loaded);
}

#[tokio::test(start_paused = true)]
async fn empty_facets_are_omitted_from_the_request_body() {
    let stub = Arc::new(StubCatalogApi::new());
    let mut app = open_filter_page(&stub).await;

    // Toggle a genre on and off again, leave one type selected.
    app.dispatch(AppMessage::Filter(filter::Message::ToggleGenre("14".into())));
    app.dispatch(AppMessage::Filter(filter::Message::ToggleGenre("14".into())));
    app.dispatch(AppMessage::Filter(filter::Message::ToggleType("2".into())));
    app.dispatch(AppMessage::Filter(filter::Message::Submit));
    app.run_until_idle().await;

    let requests = stub.calls_matching("filter page=");
    assert_eq!(requests.len(), 1);
    let body = &requests[0];
    assert!(
        !body.contains("genreIds"),
        "zero selections must omit the field entirely: {body}"
    );
    assert!(body.contains(r#""typeIds":["2"]"#));
    assert!(body.contains(r#""sortBy":"released""#), "default sort: {body}");
    assert!(body.contains(r#""limit":25"#));
}

#[tokio::test(start_paused = true)]
async fn year_facet_sends_only_the_first_selection() {
    let stub = Arc::new(StubCatalogApi::new());
    let mut app = open_filter_page(&stub).await;

    app.dispatch(AppMessage::Filter(filter::Message::ToggleYear("1999".into())));
    app.dispatch(AppMessage::Filter(filter::Message::ToggleYear("2003".into())));
    app.dispatch(AppMessage::Filter(filter::Message::Submit));
    app.run_until_idle().await;

    let requests = stub.calls_matching("filter page=");
    assert!(requests[0].contains(r#""year":1999"#), "{}", requests[0]);
    assert!(!requests[0].contains("2003"));
}

#[tokio::test(start_paused = true)]
async fn toggles_reset_the_page_but_never_auto_search() {
    let stub = Arc::new(StubCatalogApi::new());
    stub.push_filter_page(page(25, 100));
    stub.push_filter_page(page(25, 100));
    let mut app = open_filter_page(&stub).await;

    app.dispatch(AppMessage::Filter(filter::Message::Submit));
    app.run_until_idle().await;
    app.dispatch(AppMessage::Filter(filter::Message::GoToPage(3)));
    app.run_until_idle().await;
    assert_eq!(app.state().domains.filter.current_page, 3);

    let searches_so_far = stub.calls_matching("filter page=").len();
    app.dispatch(AppMessage::Filter(filter::Message::ToggleStatus("5".into())));
    app.run_until_idle().await;

    let state = &app.state().domains.filter;
    assert_eq!(state.current_page, 1, "a new filter invalidates the position");
    assert_eq!(
        stub.calls_matching("filter page=").len(),
        searches_so_far,
        "search is pull, not reactive"
    );
}

#[tokio::test(start_paused = true)]
async fn empty_error_and_result_phases_are_distinguished() {
    let stub = Arc::new(StubCatalogApi::new());
    stub.push_filter_page(page(0, 0));
    stub.push_filter_failure("backend exploded");
    stub.push_filter_page(page(3, 3));
    let mut app = open_filter_page(&stub).await;

    app.dispatch(AppMessage::Filter(filter::Message::Submit));
    app.run_until_idle().await;
    assert_eq!(app.state().domains.filter.phase(), FilterPhase::Empty);

    app.dispatch(AppMessage::Filter(filter::Message::Submit));
    app.run_until_idle().await;
    {
        let state = &app.state().domains.filter;
        assert_eq!(state.phase(), FilterPhase::Error);
        assert_eq!(state.error.as_deref(), Some("backend exploded"));
        assert!(state.results.is_empty());
        assert_eq!(state.total_count, 0);
    }

    // Retry through the same control succeeds.
    app.dispatch(AppMessage::Filter(filter::Message::Submit));
    app.run_until_idle().await;
    let state = &app.state().domains.filter;
    assert_eq!(state.phase(), FilterPhase::Results);
    assert_eq!(state.results.len(), 3);
}

#[tokio::test(start_paused = true)]
async fn late_response_from_a_superseded_submission_is_dropped() {
    let stub = Arc::new(StubCatalogApi::new());
    stub.push_delayed_filter_page(page(25, 250), Duration::from_millis(500));
    stub.push_filter_page(page(2, 2));
    let mut app = open_filter_page(&stub).await;

    app.dispatch(AppMessage::Filter(filter::Message::Submit));
    app.dispatch(AppMessage::Filter(filter::Message::Submit));
    app.run_until_idle().await;

    let state = &app.state().domains.filter;
    assert_eq!(
        state.total_count, 2,
        "the slow first response must not overwrite the newer one"
    );
    assert_eq!(state.results.len(), 2);
}

#[tokio::test(start_paused = true)]
async fn page_requests_are_clamped_to_the_valid_range() {
    let stub = Arc::new(StubCatalogApi::new());
    stub.push_filter_page(page(25, 100)); // 4 pages
    stub.push_filter_page(page(25, 100));
    let mut app = open_filter_page(&stub).await;

    app.dispatch(AppMessage::Filter(filter::Message::Submit));
    app.run_until_idle().await;

    app.dispatch(AppMessage::Filter(filter::Message::GoToPage(9)));
    app.run_until_idle().await;

    let state = &app.state().domains.filter;
    assert_eq!(state.current_page, 4);
    assert!(state.can_go_previous());
    assert!(!state.can_go_next());
}

#[tokio::test(start_paused = true)]
async fn sort_change_resets_pagination_and_rides_the_next_request() {
    let stub = Arc::new(StubCatalogApi::new());
    stub.push_filter_page(page(25, 100));
    let mut app = open_filter_page(&stub).await;

    app.dispatch(AppMessage::Filter(filter::Message::SetSortKey(SortKey::Rating)));
    app.dispatch(AppMessage::Filter(filter::Message::Submit));
    app.run_until_idle().await;

    let requests = stub.calls_matching("filter page=");
    assert!(requests[0].contains(r#""sortBy":"rating""#));
}

#[tokio::test(start_paused = true)]
async fn leaving_and_returning_remounts_the_page_fresh() {
    let stub = Arc::new(StubCatalogApi::new());
    stub.push_filter_page(page(25, 100));
    let mut app = open_filter_page(&stub).await;

    app.dispatch(AppMessage::Filter(filter::Message::ToggleGenre("14".into())));
    app.dispatch(AppMessage::Filter(filter::Message::Submit));
    app.run_until_idle().await;
    assert_eq!(app.state().domains.filter.phase(), FilterPhase::Results);

    app.dispatch(go(Route::Home));
    app.run_until_idle().await;
    app.dispatch(go(Route::FilterSearch));
    app.run_until_idle().await;

    let state = &app.state().domains.filter;
    assert!(state.selection.genre_ids.is_empty());
    assert_eq!(state.phase(), FilterPhase::Idle);
    assert_eq!(
        stub.calls_matching("filter_options").len(),
        2,
        "the option catalog is fetched once per mount"
    );
}
