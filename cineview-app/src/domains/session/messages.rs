//! Session domain messages

use cineview_model::{LoginRequest, RegisterRequest, User};

use crate::common::messages::Fetched;

/// Session domain messages
#[derive(Clone, Debug)]
pub enum Message {
    // Startup flow
    /// Probe the profile endpoint to re-validate any existing session
    ValidateSession,
    /// Profile probe settled
    SessionValidated(Fetched<User>),

    // Login / registration
    SubmitLogin(LoginRequest),
    LoginResult(Fetched<User>),
    SubmitRegistration(RegisterRequest),
    RegistrationResult(Fetched<User>),

    // Logout
    Logout,
    LogoutComplete(Fetched<()>),
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ValidateSession => "ValidateSession",
            Self::SessionValidated(_) => "SessionValidated",
            Self::SubmitLogin(_) => "SubmitLogin",
            Self::LoginResult(_) => "LoginResult",
            Self::SubmitRegistration(_) => "SubmitRegistration",
            Self::RegistrationResult(_) => "RegistrationResult",
            Self::Logout => "Logout",
            Self::LogoutComplete(_) => "LogoutComplete",
        }
    }
}
