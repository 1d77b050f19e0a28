//! Filter domain update logic

use log::warn;

use super::messages::Message;
use super::types::FilterSelection;
use crate::common::messages::{AppMessage, CrossDomainEvent, FetchError, UpdateResult};
use crate::common::task::Task;
use crate::state::AppState;

pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::LoadOptions => {
            let filter = &mut state.domains.filter;
            if filter.options_loaded || filter.loading_options {
                return UpdateResult::none();
            }
            filter.loading_options = true;

            let api = state.api.clone();
            UpdateResult::task(Task::perform(
                async move { api.filter_options().await.map_err(FetchError::from) },
                |result| AppMessage::Filter(Message::OptionsLoaded(result)),
            ))
        }

        Message::OptionsLoaded(result) => {
            let filter = &mut state.domains.filter;
            filter.loading_options = false;
            match result {
                Ok(options) => {
                    filter.options = options;
                    filter.options_loaded = true;
                    UpdateResult::none()
                }
                Err(error) => {
                    // The panel stays on its (empty) defaults; the user
                    // can still submit an unconstrained search.
                    warn!("failed to fetch filter options: {error}");
                    if error.is_unauthorized() {
                        UpdateResult::event(CrossDomainEvent::Unauthorized)
                    } else {
                        UpdateResult::none()
                    }
                }
            }
        }

        // Facet toggles mutate the selection and invalidate the
        // pagination position, but never trigger a search themselves:
        // submission is an explicit user action.
        Message::ToggleGenre(id) => {
            let filter = &mut state.domains.filter;
            FilterSelection::toggle(&mut filter.selection.genre_ids, &id);
            filter.current_page = 1;
            UpdateResult::none()
        }
        Message::ToggleType(id) => {
            let filter = &mut state.domains.filter;
            FilterSelection::toggle(&mut filter.selection.type_ids, &id);
            filter.current_page = 1;
            UpdateResult::none()
        }
        Message::ToggleStatus(id) => {
            let filter = &mut state.domains.filter;
            FilterSelection::toggle(&mut filter.selection.status_ids, &id);
            filter.current_page = 1;
            UpdateResult::none()
        }
        Message::ToggleYear(id) => {
            let filter = &mut state.domains.filter;
            FilterSelection::toggle(&mut filter.selection.year_ids, &id);
            filter.current_page = 1;
            UpdateResult::none()
        }

        Message::SetSortKey(key) => {
            let filter = &mut state.domains.filter;
            filter.selection.sort_by = key;
            filter.current_page = 1;
            UpdateResult::none()
        }

        Message::Submit => search(state, 1),

        Message::GoToPage(page) => {
            let filter = &state.domains.filter;
            if filter.is_loading {
                return UpdateResult::none();
            }
            let page = page.clamp(1, filter.total_pages().max(1));
            search(state, page)
        }

        Message::ResultsLoaded { seq, page, result } => {
            let filter = &mut state.domains.filter;
            // A later submission is already in flight or settled; this
            // response lost the race and must not overwrite it.
            if seq != filter.submit_seq {
                return UpdateResult::none();
            }
            filter.is_loading = false;

            match result {
                Ok(results_page) => {
                    filter.results = results_page.titles;
                    filter.total_count = results_page.count;
                    filter.current_page = page;
                    filter.error = None;
                    UpdateResult::none()
                }
                Err(error) => {
                    filter.results.clear();
                    filter.total_count = 0;
                    filter.error = Some(error.to_string());
                    if error.is_unauthorized() {
                        UpdateResult::event(CrossDomainEvent::Unauthorized)
                    } else {
                        UpdateResult::none()
                    }
                }
            }
        }
    }
}

fn search(state: &mut AppState, page: u32) -> UpdateResult {
    let filter = &mut state.domains.filter;
    filter.is_loading = true;
    filter.has_searched = true;
    filter.error = None;
    filter.submit_seq += 1;

    let seq = filter.submit_seq;
    let request = filter.selection.to_request(page);
    let api = state.api.clone();
    UpdateResult::task(Task::perform(
        async move {
            let result = api.filter_titles(&request).await;
            (seq, page, result.map_err(FetchError::from))
        },
        |(seq, page, result)| {
            AppMessage::Filter(Message::ResultsLoaded { seq, page, result })
        },
    ))
}
