//! Navigation domain messages

use super::types::{NavContext, Route};

/// Navigation domain messages
#[derive(Clone, Debug)]
pub enum Message {
    /// Go to a route, optionally carrying context for the destination
    Push {
        route: Route,
        context: Option<NavContext>,
    },
    /// Plain previous-page navigation
    Back,
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Push { .. } => "Push",
            Self::Back => "Back",
        }
    }

    /// Context-free push, the common case.
    pub fn go(route: Route) -> Self {
        Self::Push {
            route,
            context: None,
        }
    }
}
