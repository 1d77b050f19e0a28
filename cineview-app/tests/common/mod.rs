//! Shared fixtures for the integration suite.
#![allow(dead_code)]

use std::sync::Arc;

use cineview_app::domains::navigation::{self, Route};
use cineview_app::domains::{search, session};
use cineview_app::testing::{sample_user, StubCatalogApi};
use cineview_app::{AppMessage, AppRuntime};

/// Runtime over a shared stub server.
pub fn app_with(stub: &Arc<StubCatalogApi>) -> AppRuntime {
    AppRuntime::new(stub.clone())
}

/// Runtime with an authenticated session already established.
pub async fn signed_in_app(stub: &Arc<StubCatalogApi>, role: &str) -> AppRuntime {
    stub.set_profile(sample_user(role));
    let mut app = app_with(stub);
    app.dispatch(AppMessage::Session(session::Message::ValidateSession));
    app.run_until_idle().await;
    assert!(app.state().domains.session.is_authenticated());
    app
}

/// Type a query and submit it, settling all resulting work.
pub async fn commit_search(app: &mut AppRuntime, query: &str) {
    app.dispatch(AppMessage::Search(search::Message::QueryChanged(
        query.to_string(),
    )));
    app.dispatch(AppMessage::Search(search::Message::Submit));
    app.run_until_idle().await;
}

pub fn go(route: Route) -> AppMessage {
    AppMessage::Navigation(navigation::Message::go(route))
}
