//! Session domain update logic

use cineview_model::User;
use log::{info, warn};

use super::messages::Message;
use super::validation;
use crate::common::messages::{AppMessage, CrossDomainEvent, FetchError, UpdateResult};
use crate::common::task::Task;
use crate::domains::navigation::{self, Route};
use crate::state::AppState;

pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::ValidateSession => {
            let session = &mut state.domains.session;
            session.validating = true;

            // The cached record renders instantly but proves nothing;
            // the profile endpoint decides.
            if let Some(cached) = state.user_cache.load() {
                session.previously_authenticated = true;
                session.user = Some(cached);
            }

            let api = state.api.clone();
            UpdateResult::task(Task::perform(
                async move { api.profile().await.map_err(FetchError::from) },
                |result| AppMessage::Session(Message::SessionValidated(result)),
            ))
        }

        Message::SessionValidated(result) => {
            let had_session = state.domains.session.previously_authenticated;
            state.domains.session.validating = false;
            match result {
                Ok(user) => establish(state, user, None),
                Err(FetchError::Unauthorized) if !had_session => {
                    // Anonymous first load: the probe failing is the
                    // expected answer, not a reason to redirect.
                    state.domains.session.user = None;
                    UpdateResult::none()
                }
                Err(error) => {
                    warn!("session validation failed: {error}");
                    drop_session(state)
                }
            }
        }

        Message::SubmitLogin(request) => {
            if let Err(message) = validation::validate_login(&request) {
                state.domains.session.error = Some(message);
                return UpdateResult::none();
            }
            let session = &mut state.domains.session;
            session.pending = true;
            session.error = None;

            let api = state.api.clone();
            UpdateResult::task(Task::perform(
                async move { api.login(&request).await.map_err(FetchError::from) },
                |result| AppMessage::Session(Message::LoginResult(result)),
            ))
        }

        Message::LoginResult(result) => {
            state.domains.session.pending = false;
            match result {
                Ok(user) => {
                    // Landing page depends on role.
                    let route = if user.is_executive() {
                        Route::ExecutiveDashboard
                    } else if user.is_production() {
                        Route::ProductionDashboard
                    } else {
                        Route::Home
                    };
                    establish(state, user, Some(route))
                }
                Err(error) => {
                    state.domains.session.error = Some(error.to_string());
                    UpdateResult::none()
                }
            }
        }

        Message::SubmitRegistration(request) => {
            if let Err(message) = validation::validate_registration(&request) {
                state.domains.session.error = Some(message);
                return UpdateResult::none();
            }
            let session = &mut state.domains.session;
            session.pending = true;
            session.error = None;

            let api = state.api.clone();
            UpdateResult::task(Task::perform(
                async move { api.register(&request).await.map_err(FetchError::from) },
                |result| AppMessage::Session(Message::RegistrationResult(result)),
            ))
        }

        Message::RegistrationResult(result) => {
            state.domains.session.pending = false;
            match result {
                // Registration logs the user in; the session cookie is
                // already set by the time the response lands.
                Ok(user) => establish(state, user, Some(Route::Home)),
                Err(error) => {
                    state.domains.session.error = Some(error.to_string());
                    UpdateResult::none()
                }
            }
        }

        Message::Logout => {
            // Local state drops atomically; the server call is a
            // courtesy notification.
            let result = drop_session(state);
            let api = state.api.clone();
            let logout_call = Task::perform(
                async move { api.logout().await.map_err(FetchError::from) },
                |result| AppMessage::Session(Message::LogoutComplete(result)),
            );
            UpdateResult::with_events(
                Task::batch([result.task, logout_call]),
                result.events,
            )
        }

        Message::LogoutComplete(result) => {
            if let Err(error) = result {
                warn!("logout call failed: {error}");
            }
            UpdateResult::none()
        }
    }
}

/// The global 401 policy: a rejected session on any credentialed call
/// clears local state and redirects to login, but only when a session
/// was previously believed active.
pub fn handle_event(state: &mut AppState, event: &CrossDomainEvent) -> Task<AppMessage> {
    match event {
        CrossDomainEvent::Unauthorized => {
            if state.domains.session.previously_authenticated {
                info!("session rejected by server, returning to login");
                drop_session(state).task
            } else {
                Task::none()
            }
        }
        _ => Task::none(),
    }
}

fn establish(state: &mut AppState, user: User, route: Option<Route>) -> UpdateResult {
    state.user_cache.store(&user);
    let session = &mut state.domains.session;
    session.user = Some(user.clone());
    session.previously_authenticated = true;
    session.error = None;

    let task = match route {
        Some(route) => Task::done(AppMessage::Navigation(navigation::Message::go(route))),
        None => Task::none(),
    };
    UpdateResult::with_events(task, vec![CrossDomainEvent::SessionEstablished(user)])
}

fn drop_session(state: &mut AppState) -> UpdateResult {
    state.user_cache.clear();
    let session = &mut state.domains.session;
    session.user = None;
    session.previously_authenticated = false;
    session.pending = false;

    UpdateResult::with_events(
        Task::done(AppMessage::Navigation(navigation::Message::go(Route::Login))),
        vec![CrossDomainEvent::SessionCleared],
    )
}
