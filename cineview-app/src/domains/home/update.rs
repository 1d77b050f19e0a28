use log::error;

use super::messages::Message;
use super::types::RAIL_LIMIT;
use crate::common::messages::{AppMessage, CrossDomainEvent, FetchError, UpdateResult};
use crate::common::task::Task;
use crate::state::AppState;

pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::LoadRails => {
            let home = &mut state.domains.home;
            home.trending_loading = true;
            home.top_rated_loading = true;
            home.error = None;

            let trending_api = state.api.clone();
            let top_rated_api = state.api.clone();
            UpdateResult::task(Task::batch([
                Task::perform(
                    async move {
                        trending_api
                            .trending(RAIL_LIMIT)
                            .await
                            .map_err(FetchError::from)
                    },
                    |result| AppMessage::Home(Message::TrendingLoaded(result)),
                ),
                Task::perform(
                    async move {
                        top_rated_api
                            .top_rated(RAIL_LIMIT)
                            .await
                            .map_err(FetchError::from)
                    },
                    |result| AppMessage::Home(Message::TopRatedLoaded(result)),
                ),
            ]))
        }

        Message::TrendingLoaded(result) => {
            let home = &mut state.domains.home;
            home.trending_loading = false;
            match result {
                Ok(titles) => {
                    home.trending = titles;
                    UpdateResult::none()
                }
                Err(err) => rail_failed(state, err),
            }
        }

        Message::TopRatedLoaded(result) => {
            let home = &mut state.domains.home;
            home.top_rated_loading = false;
            match result {
                Ok(titles) => {
                    home.top_rated = titles;
                    UpdateResult::none()
                }
                Err(err) => rail_failed(state, err),
            }
        }
    }
}

fn rail_failed(state: &mut AppState, err: FetchError) -> UpdateResult {
    error!("Failed to fetch titles: {err}");
    state.domains.home.error = Some("Failed to load titles".to_string());
    if err.is_unauthorized() {
        UpdateResult::event(CrossDomainEvent::Unauthorized)
    } else {
        UpdateResult::none()
    }
}
