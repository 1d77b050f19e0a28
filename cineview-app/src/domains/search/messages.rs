//! Search domain messages

use cineview_model::TitleSearchHit;

use crate::common::messages::Fetched;

/// Search domain messages
#[derive(Clone, Debug)]
pub enum Message {
    // User actions
    /// Search input text changed
    QueryChanged(String),
    /// Commit the current query as a full search
    Submit,
    /// Close the dropdown (click-away)
    DismissSuggestions,
    /// Open a suggestion's detail page
    SelectSuggestion(String),
    /// Open a committed result's detail page
    OpenResult(String),
    /// Clear query, results, and suggestions entirely
    Reset,

    // Internal events
    /// Debounce timer fired for the given keystroke generation
    SuggestionsDebounced { query: String, seq: u64 },
    /// Suggestion fetch settled; `query` is the text it was issued for
    SuggestionsLoaded {
        query: String,
        result: Fetched<Vec<TitleSearchHit>>,
    },
    /// Committed search settled; `query` is the text it was issued for
    ResultsLoaded {
        query: String,
        result: Fetched<Vec<TitleSearchHit>>,
    },

    // Cross-domain coordination
    /// Re-enter a committed search restored from navigation state
    Restore(String),
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::QueryChanged(_) => "QueryChanged",
            Self::Submit => "Submit",
            Self::DismissSuggestions => "DismissSuggestions",
            Self::SelectSuggestion(_) => "SelectSuggestion",
            Self::OpenResult(_) => "OpenResult",
            Self::Reset => "Reset",
            Self::SuggestionsDebounced { .. } => "SuggestionsDebounced",
            Self::SuggestionsLoaded { .. } => "SuggestionsLoaded",
            Self::ResultsLoaded { .. } => "ResultsLoaded",
            Self::Restore(_) => "Restore",
        }
    }
}
