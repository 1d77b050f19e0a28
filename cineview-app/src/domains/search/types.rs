//! Search domain types and state management

use std::time::Duration;

use cineview_model::TitleSearchHit;

/// Quiet period before a keystroke turns into a suggestion fetch.
pub const SUGGESTION_DEBOUNCE: Duration = Duration::from_millis(300);

/// Maximum entries shown in the dropdown. The server may return more;
/// the client truncates.
pub const SUGGESTION_LIMIT: usize = 5;

/// Main search domain state
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    /// Current search input text
    pub query: String,
    /// Live suggestions for the current input
    pub suggestions: Vec<TitleSearchHit>,
    /// Whether the dropdown is visible
    pub show_suggestions: bool,
    /// Committed search results
    pub results: Vec<TitleSearchHit>,
    /// The query the committed results belong to
    pub committed_query: Option<String>,
    /// Whether a search has been submitted on this page visit
    pub has_searched: bool,
    /// Whether a committed search is in flight
    pub is_searching: bool,
    /// Error message if the committed search failed
    pub error: Option<String>,
    /// Debounce generation. Bumped on every keystroke so an unfired
    /// timer from an earlier keystroke is a no-op when it lands.
    pub debounce_seq: u64,
    /// One-shot flag: skip the suggestion cycle triggered by a query
    /// restored from navigation state. Consumed on the next keystroke
    /// event, set again only by another restoration.
    pub suppress_suggestions_once: bool,
}

impl SearchState {
    /// Clear search state
    pub fn clear(&mut self) {
        self.query.clear();
        self.suggestions.clear();
        self.show_suggestions = false;
        self.results.clear();
        self.committed_query = None;
        self.has_searched = false;
        self.is_searching = false;
        self.error = None;
        self.suppress_suggestions_once = false;
        // debounce_seq is intentionally kept: a timer scheduled before
        // the reset must still be recognized as stale.
        self.debounce_seq += 1;
    }

    /// Hide the dropdown without touching committed results.
    pub fn dismiss_suggestions(&mut self) {
        self.suggestions.clear();
        self.show_suggestions = false;
    }

    /// Whether committed results for exactly this query are the active
    /// view. While they are, a suggestion dropdown would duplicate them.
    pub fn committed_matches(&self, query: &str) -> bool {
        self.has_searched && self.committed_query.as_deref() == Some(query)
    }
}
