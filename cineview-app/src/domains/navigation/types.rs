//! Navigation domain types

/// Client-side routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    FilterSearch,
    TitleDetail(String),
    Login,
    Register,
    Profile,
    ExecutiveDashboard,
    ProductionDashboard,
}

impl Route {
    /// Role required to enter, if any.
    pub fn required_role(&self) -> Option<&'static str> {
        match self {
            Route::ExecutiveDashboard => Some("executive"),
            Route::ProductionDashboard => Some("production"),
            _ => None,
        }
    }
}

/// Data attached to a route transition, readable once by the
/// destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavContext {
    /// Entering a detail page from a suggestion or committed result.
    FromSearch { query: String },
    /// Returning to the origin list with a search to restore.
    ReturnToSearch { query: String },
}

/// Navigation domain state
#[derive(Debug, Clone)]
pub struct NavigationState {
    /// Route currently shown
    pub current: Route,
    /// Back stack
    pub history: Vec<Route>,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            current: Route::Home,
            history: Vec::new(),
        }
    }
}
