//! Session domain types

use cineview_model::User;

/// Session domain state.
///
/// Mutated only by login/logout/validation messages so no view ever sees
/// a half-established session.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    /// The authenticated user, if any
    pub user: Option<User>,
    /// Whether the startup profile probe is in flight
    pub validating: bool,
    /// Whether a session was believed active at some point. Gates the
    /// 401 redirect so the first-load profile probe cannot bounce an
    /// anonymous visitor to the login page.
    pub previously_authenticated: bool,
    /// Whether a login/register submission is in flight
    pub pending: bool,
    /// Inline error for the login/register forms
    pub error: Option<String>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
