//! Application state container and the top-level routers.

use std::sync::Arc;

use cineview_client::CatalogApi;

use crate::common::messages::{AppMessage, CrossDomainEvent, UpdateResult};
use crate::common::task::Task;
use crate::domains::detail::DetailState;
use crate::domains::filter::FilterState;
use crate::domains::home::HomeState;
use crate::domains::navigation::NavigationState;
use crate::domains::profile::ProfileState;
use crate::domains::search::SearchState;
use crate::domains::session::{MemoryUserCache, SessionState, UserCache};
use crate::domains::{detail, filter, home, navigation, profile, search, session};

/// Per-domain state slices.
#[derive(Debug, Clone, Default)]
pub struct Domains {
    pub session: SessionState,
    pub home: HomeState,
    pub search: SearchState,
    pub filter: FilterState,
    pub detail: DetailState,
    pub profile: ProfileState,
    pub navigation: NavigationState,
}

/// The whole application state plus its injected collaborators.
pub struct AppState {
    /// Gateway to the catalog server
    pub api: Arc<dyn CatalogApi>,
    /// Cached user record for fast first paint
    pub user_cache: Arc<dyn UserCache>,
    pub domains: Domains,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("domains", &self.domains)
            .finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self::with_user_cache(api, Arc::new(MemoryUserCache::default()))
    }

    pub fn with_user_cache(
        api: Arc<dyn CatalogApi>,
        user_cache: Arc<dyn UserCache>,
    ) -> Self {
        Self {
            api,
            user_cache,
            domains: Domains::default(),
        }
    }
}

/// Route a message to its domain's update function.
pub fn update(state: &mut AppState, message: AppMessage) -> UpdateResult {
    match message {
        AppMessage::Session(message) => session::update(state, message),
        AppMessage::Home(message) => home::update(state, message),
        AppMessage::Search(message) => search::update(state, message),
        AppMessage::Filter(message) => filter::update(state, message),
        AppMessage::Detail(message) => detail::update(state, message),
        AppMessage::Profile(message) => profile::update(state, message),
        AppMessage::Navigation(message) => navigation::update(state, message),
        AppMessage::NoOp => UpdateResult::none(),
    }
}

/// Broadcast an event to every domain that listens.
pub fn handle_event(state: &mut AppState, event: &CrossDomainEvent) -> Task<AppMessage> {
    Task::batch([
        session::handle_event(state, event),
        navigation::handle_event(state, event),
    ])
}
