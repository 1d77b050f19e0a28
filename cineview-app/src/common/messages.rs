//! The message router, cross-domain events, and shared result types.

use std::fmt;

use cineview_client::ApiError;
use cineview_model::User;

use crate::common::task::Task;
use crate::domains::{detail, filter, home, navigation, profile, search, session};

/// Error form carried inside messages.
///
/// [`ApiError`] is not `Clone`, so fetch tasks flatten it at the task
/// boundary. The 401 case survives as its own variant because the session
/// domain reacts to it globally; everything else is already a display
/// string by the time a page shows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The server rejected the session cookie.
    Unauthorized,
    /// Any other failure, reduced to its user-facing message.
    Message(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Unauthorized => write!(f, "session expired"),
            FetchError::Message(message) => write!(f, "{message}"),
        }
    }
}

impl From<ApiError> for FetchError {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::Unauthorized => FetchError::Unauthorized,
            other => FetchError::Message(other.to_string()),
        }
    }
}

impl FetchError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, FetchError::Unauthorized)
    }
}

/// Result type carried inside messages.
pub type Fetched<T> = Result<T, FetchError>;

/// The main domain message router.
#[derive(Clone, Debug)]
pub enum AppMessage {
    /// Session / authentication domain
    Session(session::Message),

    /// Home page rails domain
    Home(home::Message),

    /// Home page search + suggestion domain
    Search(search::Message),

    /// Faceted filter page domain
    Filter(filter::Message),

    /// Title detail domain
    Detail(detail::Message),

    /// Profile page domain
    Profile(profile::Message),

    /// Route transitions
    Navigation(navigation::Message),

    /// Cross-domain coordination
    NoOp,
}

// Automatic routing from domain messages
impl From<session::Message> for AppMessage {
    fn from(message: session::Message) -> Self {
        AppMessage::Session(message)
    }
}

impl From<home::Message> for AppMessage {
    fn from(message: home::Message) -> Self {
        AppMessage::Home(message)
    }
}

impl From<search::Message> for AppMessage {
    fn from(message: search::Message) -> Self {
        AppMessage::Search(message)
    }
}

impl From<filter::Message> for AppMessage {
    fn from(message: filter::Message) -> Self {
        AppMessage::Filter(message)
    }
}

impl From<detail::Message> for AppMessage {
    fn from(message: detail::Message) -> Self {
        AppMessage::Detail(message)
    }
}

impl From<profile::Message> for AppMessage {
    fn from(message: profile::Message) -> Self {
        AppMessage::Profile(message)
    }
}

impl From<navigation::Message> for AppMessage {
    fn from(message: navigation::Message) -> Self {
        AppMessage::Navigation(message)
    }
}

impl AppMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Session(message) => message.name(),
            Self::Home(message) => message.name(),
            Self::Search(message) => message.name(),
            Self::Filter(message) => message.name(),
            Self::Detail(message) => message.name(),
            Self::Profile(message) => message.name(),
            Self::Navigation(message) => message.name(),
            Self::NoOp => "AppMessage::NoOp",
        }
    }
}

/// Cross-domain event bus for coordination.
#[derive(Clone, Debug, PartialEq)]
pub enum CrossDomainEvent {
    // Session events
    SessionEstablished(User),
    SessionCleared,
    /// Some credentialed call got a 401; the session domain decides
    /// whether this means a redirect.
    Unauthorized,

    // Navigation events
    /// Open a detail page. `origin_query` is set when the user came from
    /// a committed search or a suggestion, and rides along so the detail
    /// page's Back control can return to an intact result set.
    NavigateToDetail {
        title_id: String,
        origin_query: Option<String>,
    },
    /// The detail page's Back control, when the visit originated from a
    /// search: go home and restore that search.
    ReturnToSearch { query: String },
}

/// Result of a domain update: deferred work plus events to broadcast to
/// the other domains before the next message is processed.
#[derive(Debug)]
pub struct UpdateResult {
    pub task: Task<AppMessage>,
    pub events: Vec<CrossDomainEvent>,
}

impl UpdateResult {
    /// No work, no events.
    pub fn none() -> Self {
        Self {
            task: Task::none(),
            events: Vec::new(),
        }
    }

    /// Create a result with just a task.
    pub fn task(task: Task<AppMessage>) -> Self {
        Self {
            task,
            events: Vec::new(),
        }
    }

    /// Create a result with just an event.
    pub fn event(event: CrossDomainEvent) -> Self {
        Self {
            task: Task::none(),
            events: vec![event],
        }
    }

    /// Create a result with task and events.
    pub fn with_events(task: Task<AppMessage>, events: Vec<CrossDomainEvent>) -> Self {
        Self { task, events }
    }

    /// Add an event to this result.
    pub fn add_event(mut self, event: CrossDomainEvent) -> Self {
        self.events.push(event);
        self
    }
}
