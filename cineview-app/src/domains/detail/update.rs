//! Detail domain update logic

use cineview_model::CreateReviewRequest;
use log::{debug, warn};

use super::messages::Message;
use super::types::{DetailState, WatchlistMembership, DETAIL_TIMEOUT};
use crate::common::messages::{AppMessage, CrossDomainEvent, FetchError, UpdateResult};
use crate::common::task::Task;
use crate::domains::navigation;
use crate::state::AppState;

pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Load {
            title_id,
            origin_query,
        } => {
            state.domains.detail =
                DetailState::for_title(title_id.clone(), origin_query);

            let mut tasks = vec![
                detail_fetch(state, title_id.clone()),
                reviews_fetch(state, title_id.clone()),
            ];
            // Per-user probes only make sense with a session.
            if state.domains.session.is_authenticated() {
                tasks.push(my_review_fetch(state, title_id.clone()));
                tasks.push(watchlist_probe(state, title_id));
            }
            UpdateResult::task(Task::batch(tasks))
        }

        Message::Loaded { title_id, result } => {
            let detail = &mut state.domains.detail;
            // The route moved on while this was in flight.
            if !detail.is_current(&title_id) {
                return UpdateResult::none();
            }
            detail.loading = false;

            match result {
                Ok(payload) if payload.is_found() => {
                    detail.detail = Some(payload);
                    detail.error = None;
                    UpdateResult::none()
                }
                Ok(_) => {
                    detail.detail = None;
                    detail.error = Some("Title not found".to_string());
                    UpdateResult::none()
                }
                Err(error) => {
                    detail.error = Some(error.to_string());
                    if error.is_unauthorized() {
                        UpdateResult::event(CrossDomainEvent::Unauthorized)
                    } else {
                        UpdateResult::none()
                    }
                }
            }
        }

        Message::ReviewsLoaded { title_id, result } => {
            let detail = &mut state.domains.detail;
            if !detail.is_current(&title_id) {
                return UpdateResult::none();
            }
            match result {
                Ok(reviews) => detail.reviews = reviews,
                // The review rail degrades to empty; the page still works.
                Err(error) => debug!("reviews fetch for {title_id} failed: {error}"),
            }
            UpdateResult::none()
        }

        Message::MyReviewLoaded { title_id, result } => {
            let detail = &mut state.domains.detail;
            if !detail.is_current(&title_id) {
                return UpdateResult::none();
            }
            match result {
                Ok(review) => detail.my_review = review,
                Err(error) => debug!("own-review check for {title_id} failed: {error}"),
            }
            UpdateResult::none()
        }

        Message::WatchlistStatusLoaded { title_id, result } => {
            let detail = &mut state.domains.detail;
            if !detail.is_current(&title_id) {
                return UpdateResult::none();
            }
            match result {
                Ok(status) => {
                    detail.watchlist = if status.in_watchlist {
                        WatchlistMembership::In
                    } else {
                        WatchlistMembership::Out
                    };
                }
                // Best-effort: the button keeps its default state.
                Err(error) => {
                    debug!("watchlist status for {title_id} failed: {error}");
                }
            }
            UpdateResult::none()
        }

        Message::SubmitReview { rating, text } => {
            let detail = &mut state.domains.detail;
            let Some(title_id) = detail.requested_id.clone() else {
                return UpdateResult::none();
            };
            if !(1..=10).contains(&rating) {
                detail.review_error =
                    Some("Rating must be between 1 and 10".to_string());
                return UpdateResult::none();
            }
            if text.trim().is_empty() {
                detail.review_error = Some("Review text is required".to_string());
                return UpdateResult::none();
            }
            detail.saving_review = true;
            detail.review_error = None;

            let request = CreateReviewRequest {
                title_id,
                rating,
                review_text: text,
            };
            let api = state.api.clone();
            UpdateResult::task(Task::perform(
                async move { api.save_review(&request).await.map_err(FetchError::from) },
                |result| AppMessage::Detail(Message::ReviewSaved(result)),
            ))
        }

        Message::ReviewSaved(result) => {
            let detail = &mut state.domains.detail;
            detail.saving_review = false;
            match result {
                Ok(review) => {
                    let title_id = review.title_id.clone();
                    detail.my_review = Some(review);
                    detail.review_error = None;
                    // Refresh the rail so the new review shows with its
                    // server-assigned timestamps.
                    UpdateResult::task(reviews_fetch(state, title_id))
                }
                Err(error) => {
                    detail.review_error = Some(error.to_string());
                    if error.is_unauthorized() {
                        UpdateResult::event(CrossDomainEvent::Unauthorized)
                    } else {
                        UpdateResult::none()
                    }
                }
            }
        }

        Message::DeleteReview(review_id) => {
            let api = state.api.clone();
            UpdateResult::task(Task::perform(
                async move {
                    let result = api.delete_review(review_id).await;
                    (review_id, result.map_err(FetchError::from))
                },
                |(review_id, result)| {
                    AppMessage::Detail(Message::ReviewDeleted { review_id, result })
                },
            ))
        }

        Message::ReviewDeleted { review_id, result } => {
            let detail = &mut state.domains.detail;
            match result {
                Ok(()) => {
                    if detail
                        .my_review
                        .as_ref()
                        .is_some_and(|review| review.review_id == review_id)
                    {
                        detail.my_review = None;
                    }
                    detail.reviews.retain(|review| review.review_id != review_id);
                    UpdateResult::none()
                }
                Err(error) => {
                    detail.review_error = Some(error.to_string());
                    if error.is_unauthorized() {
                        UpdateResult::event(CrossDomainEvent::Unauthorized)
                    } else {
                        UpdateResult::none()
                    }
                }
            }
        }

        Message::ToggleWatchlist => {
            let detail = &mut state.domains.detail;
            let Some(title_id) = detail.requested_id.clone() else {
                return UpdateResult::none();
            };
            if detail.watchlist_busy {
                return UpdateResult::none();
            }
            detail.watchlist_busy = true;

            let adding = detail.watchlist != WatchlistMembership::In;
            let api = state.api.clone();
            UpdateResult::task(Task::perform(
                async move {
                    let result = if adding {
                        api.add_to_watchlist(&title_id).await
                    } else {
                        api.remove_from_watchlist(&title_id).await
                    };
                    (adding, result.map_err(FetchError::from))
                },
                |(now_in, result)| {
                    AppMessage::Detail(Message::WatchlistToggled { now_in, result })
                },
            ))
        }

        Message::WatchlistToggled { now_in, result } => {
            let detail = &mut state.domains.detail;
            detail.watchlist_busy = false;
            match result {
                Ok(()) => {
                    detail.watchlist = if now_in {
                        WatchlistMembership::In
                    } else {
                        WatchlistMembership::Out
                    };
                    UpdateResult::none()
                }
                Err(error) => {
                    warn!("watchlist update failed: {error}");
                    if error.is_unauthorized() {
                        UpdateResult::event(CrossDomainEvent::Unauthorized)
                    } else {
                        UpdateResult::none()
                    }
                }
            }
        }

        Message::Back => {
            // Arriving from a search means Back must land on the intact
            // result set, not merely the previous route.
            match state.domains.detail.origin_query.clone() {
                Some(query) => {
                    UpdateResult::event(CrossDomainEvent::ReturnToSearch { query })
                }
                None => UpdateResult::task(Task::done(AppMessage::Navigation(
                    navigation::Message::Back,
                ))),
            }
        }
    }
}

fn detail_fetch(state: &AppState, title_id: String) -> Task<AppMessage> {
    let api = state.api.clone();
    Task::perform(
        async move {
            let result = match tokio::time::timeout(
                DETAIL_TIMEOUT,
                api.title_detail(&title_id),
            )
            .await
            {
                Ok(result) => result.map_err(FetchError::from),
                Err(_) => Err(FetchError::Message(
                    "Request timed out".to_string(),
                )),
            };
            (title_id, result)
        },
        |(title_id, result)| AppMessage::Detail(Message::Loaded { title_id, result }),
    )
}

fn reviews_fetch(state: &AppState, title_id: String) -> Task<AppMessage> {
    let api = state.api.clone();
    Task::perform(
        async move {
            let result = api.reviews_for_title(&title_id).await;
            (title_id, result.map_err(FetchError::from))
        },
        |(title_id, result)| {
            AppMessage::Detail(Message::ReviewsLoaded { title_id, result })
        },
    )
}

fn my_review_fetch(state: &AppState, title_id: String) -> Task<AppMessage> {
    let api = state.api.clone();
    Task::perform(
        async move {
            let result = api.my_review_for_title(&title_id).await;
            (title_id, result.map_err(FetchError::from))
        },
        |(title_id, result)| {
            AppMessage::Detail(Message::MyReviewLoaded { title_id, result })
        },
    )
}

fn watchlist_probe(state: &AppState, title_id: String) -> Task<AppMessage> {
    let api = state.api.clone();
    Task::perform(
        async move {
            let result = api.watchlist_status(&title_id).await;
            (title_id, result.map_err(FetchError::from))
        },
        |(title_id, result)| {
            AppMessage::Detail(Message::WatchlistStatusLoaded { title_id, result })
        },
    )
}
