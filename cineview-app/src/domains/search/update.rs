//! Search domain update logic

use log::debug;

use super::messages::Message;
use super::types::{SUGGESTION_DEBOUNCE, SUGGESTION_LIMIT};
use crate::common::messages::{AppMessage, CrossDomainEvent, FetchError, UpdateResult};
use crate::common::task::Task;
use crate::state::AppState;

pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::QueryChanged(query) => {
            let search = &mut state.domains.search;
            search.query = query;
            // Any timer still pending for an earlier keystroke is now
            // stale: last keystroke wins.
            search.debounce_seq += 1;

            let trimmed = search.query.trim().to_string();
            if trimmed.is_empty() {
                search.dismiss_suggestions();
                return UpdateResult::none();
            }

            // A restored query has results on the way; skip exactly one
            // suggestion cycle for it.
            if search.suppress_suggestions_once {
                search.suppress_suggestions_once = false;
                return UpdateResult::none();
            }

            // Committed results for this exact text are the active view;
            // a dropdown would show the same answer twice.
            if search.committed_matches(&trimmed) {
                search.dismiss_suggestions();
                return UpdateResult::none();
            }

            let seq = search.debounce_seq;
            UpdateResult::task(Task::perform(
                async move {
                    tokio::time::sleep(SUGGESTION_DEBOUNCE).await;
                    (trimmed, seq)
                },
                |(query, seq)| {
                    AppMessage::Search(Message::SuggestionsDebounced { query, seq })
                },
            ))
        }

        Message::SuggestionsDebounced { query, seq } => {
            let search = &state.domains.search;
            // The user typed again (or the page reset) after this timer
            // was scheduled.
            if seq != search.debounce_seq || search.query.trim() != query {
                return UpdateResult::none();
            }

            let api = state.api.clone();
            UpdateResult::task(Task::perform(
                async move {
                    let result = api.search_titles(&query).await;
                    (query, result.map_err(FetchError::from))
                },
                |(query, result)| {
                    AppMessage::Search(Message::SuggestionsLoaded { query, result })
                },
            ))
        }

        Message::SuggestionsLoaded { query, result } => {
            let search = &mut state.domains.search;
            // A response for superseded input must not overwrite the
            // newer input's dropdown, however late it lands.
            if search.query.trim() != query {
                return UpdateResult::none();
            }

            match result {
                Ok(hits) => {
                    search.suggestions =
                        hits.into_iter().take(SUGGESTION_LIMIT).collect();
                    search.show_suggestions = !search.suggestions.is_empty();
                    UpdateResult::none()
                }
                Err(error) => {
                    // Suggestions are best-effort: degrade silently.
                    debug!("suggestion fetch for '{query}' failed: {error}");
                    search.dismiss_suggestions();
                    if error.is_unauthorized() {
                        UpdateResult::event(CrossDomainEvent::Unauthorized)
                    } else {
                        UpdateResult::none()
                    }
                }
            }
        }

        Message::Submit => {
            let query = state.domains.search.query.trim().to_string();
            if query.is_empty() {
                return UpdateResult::none();
            }
            commit_search(state, query)
        }

        Message::ResultsLoaded { query, result } => {
            let search = &mut state.domains.search;
            if search.committed_query.as_deref() != Some(query.as_str()) {
                return UpdateResult::none();
            }
            search.is_searching = false;

            match result {
                Ok(hits) => {
                    search.results = hits;
                    search.error = None;
                    UpdateResult::none()
                }
                Err(error) => {
                    search.results.clear();
                    search.error = Some(error.to_string());
                    if error.is_unauthorized() {
                        UpdateResult::event(CrossDomainEvent::Unauthorized)
                    } else {
                        UpdateResult::none()
                    }
                }
            }
        }

        Message::DismissSuggestions => {
            // Hides the dropdown; a committed search in flight keeps
            // going.
            state.domains.search.show_suggestions = false;
            UpdateResult::none()
        }

        Message::SelectSuggestion(title_id) => {
            let search = &mut state.domains.search;
            search.dismiss_suggestions();
            let query = search.query.trim().to_string();
            UpdateResult::event(CrossDomainEvent::NavigateToDetail {
                title_id,
                origin_query: (!query.is_empty()).then_some(query),
            })
        }

        Message::OpenResult(title_id) => {
            let search = &mut state.domains.search;
            search.dismiss_suggestions();
            let origin_query = search.committed_query.clone();
            UpdateResult::event(CrossDomainEvent::NavigateToDetail {
                title_id,
                origin_query,
            })
        }

        Message::Restore(query) => {
            // Returning from a detail page: only the query travels in
            // navigation state, so the results are recomputed here.
            let search = &mut state.domains.search;
            search.query = query.clone();
            search.dismiss_suggestions();
            search.suppress_suggestions_once = true;
            search.debounce_seq += 1;
            commit_search(state, query)
        }

        Message::Reset => {
            state.domains.search.clear();
            UpdateResult::none()
        }
    }
}

/// Mark the query committed and issue the result fetch.
fn commit_search(state: &mut AppState, query: String) -> UpdateResult {
    let search = &mut state.domains.search;
    search.dismiss_suggestions();
    // Kill any pending suggestion timer for the text being committed.
    search.debounce_seq += 1;
    search.committed_query = Some(query.clone());
    search.has_searched = true;
    search.is_searching = true;
    search.error = None;

    let api = state.api.clone();
    UpdateResult::task(Task::perform(
        async move {
            let result = api.search_titles(&query).await;
            (query, result.map_err(FetchError::from))
        },
        |(query, result)| AppMessage::Search(Message::ResultsLoaded { query, result }),
    ))
}
