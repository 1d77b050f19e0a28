use log::warn;

use super::messages::Message;
use super::types::ProfileState;
use crate::common::messages::{AppMessage, CrossDomainEvent, FetchError, UpdateResult};
use crate::common::task::Task;
use crate::state::AppState;

pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Load => {
            state.domains.profile = ProfileState {
                reviews_loading: true,
                watchlist_loading: true,
                ..ProfileState::default()
            };

            let reviews_api = state.api.clone();
            let watchlist_api = state.api.clone();
            UpdateResult::task(Task::batch([
                Task::perform(
                    async move {
                        reviews_api.my_reviews().await.map_err(FetchError::from)
                    },
                    |result| AppMessage::Profile(Message::MyReviewsLoaded(result)),
                ),
                Task::perform(
                    async move {
                        watchlist_api.watchlist().await.map_err(FetchError::from)
                    },
                    |result| AppMessage::Profile(Message::WatchlistLoaded(result)),
                ),
            ]))
        }

        Message::MyReviewsLoaded(result) => {
            let profile = &mut state.domains.profile;
            profile.reviews_loading = false;
            match result {
                Ok(reviews) => {
                    profile.reviews = reviews;
                    UpdateResult::none()
                }
                Err(error) => section_failed(state, error),
            }
        }

        Message::WatchlistLoaded(result) => {
            let profile = &mut state.domains.profile;
            profile.watchlist_loading = false;
            match result {
                Ok(entries) => {
                    profile.watchlist = entries;
                    UpdateResult::none()
                }
                Err(error) => section_failed(state, error),
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
                    AppMessage::Profile(Message::ReviewDeleted { review_id, result })
                },
            ))
        }

        Message::ReviewDeleted { review_id, result } => match result {
            Ok(()) => {
                state
                    .domains
                    .profile
                    .reviews
                    .retain(|review| review.review_id != review_id);
                UpdateResult::none()
            }
            Err(error) => section_failed(state, error),
        },
    }
}

fn section_failed(state: &mut AppState, error: FetchError) -> UpdateResult {
    warn!("profile data fetch failed: {error}");
    state.domains.profile.error = Some(error.to_string());
    if error.is_unauthorized() {
        UpdateResult::event(CrossDomainEvent::Unauthorized)
    } else {
        UpdateResult::none()
    }
}
