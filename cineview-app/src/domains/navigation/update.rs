//! Navigation domain update logic

use super::messages::Message;
use super::types::{NavContext, Route};
use crate::common::messages::{AppMessage, CrossDomainEvent, UpdateResult};
use crate::common::task::Task;
use crate::domains::{detail, filter, home, profile, search};
use crate::state::AppState;

pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Push { route, context } => {
            let navigation = &mut state.domains.navigation;
            if navigation.current != route {
                let previous = std::mem::replace(&mut navigation.current, route.clone());
                navigation.history.push(previous);
            }
            arrive(state, route, context)
        }

        Message::Back => {
            let navigation = &mut state.domains.navigation;
            let route = navigation.history.pop().unwrap_or(Route::Home);
            navigation.current = route.clone();
            arrive(state, route, None)
        }
    }
}

/// Arrival hooks. The context is moved in and dropped on the way out,
/// so a restoration can never replay on a later visit.
fn arrive(state: &mut AppState, route: Route, context: Option<NavContext>) -> UpdateResult {
    match route {
        Route::Home => {
            // A visit without a return-to-search payload is an unrelated
            // visit; stale search state must not leak into it.
            let search_message = match context {
                Some(NavContext::ReturnToSearch { query }) => {
                    search::Message::Restore(query)
                }
                _ => search::Message::Reset,
            };
            UpdateResult::task(Task::batch([
                Task::done(AppMessage::Search(search_message)),
                Task::done(AppMessage::Home(home::Message::LoadRails)),
            ]))
        }

        Route::FilterSearch => {
            // Fresh mount: selections do not survive leaving the page,
            // and the option catalog is fetched anew.
            state.domains.filter = filter::FilterState::default();
            UpdateResult::task(Task::done(AppMessage::Filter(
                filter::Message::LoadOptions,
            )))
        }

        Route::TitleDetail(title_id) => {
            let origin_query = match context {
                Some(NavContext::FromSearch { query }) => Some(query),
                _ => None,
            };
            UpdateResult::task(Task::done(AppMessage::Detail(detail::Message::Load {
                title_id,
                origin_query,
            })))
        }

        Route::Profile => {
            UpdateResult::task(Task::done(AppMessage::Profile(profile::Message::Load)))
        }

        _ => UpdateResult::none(),
    }
}

/// Cross-domain events that resolve into navigation.
pub fn handle_event(_state: &mut AppState, event: &CrossDomainEvent) -> Task<AppMessage> {
    match event {
        CrossDomainEvent::NavigateToDetail {
            title_id,
            origin_query,
        } => Task::done(AppMessage::Navigation(Message::Push {
            route: Route::TitleDetail(title_id.clone()),
            context: origin_query
                .clone()
                .map(|query| NavContext::FromSearch { query }),
        })),

        CrossDomainEvent::ReturnToSearch { query } => {
            Task::done(AppMessage::Navigation(Message::Push {
                route: Route::Home,
                context: Some(NavContext::ReturnToSearch {
                    query: query.clone(),
                }),
            }))
        }

        _ => Task::none(),
    }
}
