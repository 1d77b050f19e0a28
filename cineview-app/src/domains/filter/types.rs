//! Filter domain types and state management

use cineview_model::{FilterOptions, FilterRequest, FilteredTitle, SortKey};

/// Result grid page size (5 columns by 5 rows).
pub const ITEMS_PER_PAGE: u32 = 25;

/// Where the page is in its search lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterPhase {
    /// No search performed yet
    Idle,
    /// A submission is in flight
    Loading,
    /// Last submission matched at least one title
    Results,
    /// Last submission matched nothing
    Empty,
    /// Last submission failed; retry stays available
    Error,
}

/// The user's facet selections plus sort order.
///
/// Each id list is a unique-membership set: toggling an id in and out
/// returns the selection to its original state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSelection {
    pub genre_ids: Vec<String>,
    pub type_ids: Vec<String>,
    pub status_ids: Vec<String>,
    pub year_ids: Vec<String>,
    pub sort_by: SortKey,
}

impl FilterSelection {
    /// Idempotent membership toggle.
    pub fn toggle(list: &mut Vec<String>, id: &str) {
        if let Some(position) = list.iter().position(|existing| existing == id) {
            list.remove(position);
        } else {
            list.push(id.to_string());
        }
    }

    /// Build the request body for a page of this selection.
    ///
    /// Empty facet lists are omitted rather than sent as `[]` — absence
    /// means "unconstrained". The year facet is multi-select in the
    /// panel but the backend accepts a single year, so only the first
    /// selection goes out; kept as-is for contract compatibility.
    pub fn to_request(&self, page: u32) -> FilterRequest {
        FilterRequest {
            genre_ids: non_empty(&self.genre_ids),
            type_ids: non_empty(&self.type_ids),
            status_ids: non_empty(&self.status_ids),
            year: self
                .year_ids
                .first()
                .and_then(|year| year.parse().ok()),
            sort_by: self.sort_by,
            page,
            limit: ITEMS_PER_PAGE,
        }
    }
}

fn non_empty(ids: &[String]) -> Option<Vec<String>> {
    (!ids.is_empty()).then(|| ids.to_vec())
}

/// Main filter domain state
#[derive(Debug, Clone)]
pub struct FilterState {
    /// Reference data for the panel, fetched once per page mount
    pub options: FilterOptions,
    /// Whether the catalog fetch has completed
    pub options_loaded: bool,
    /// Whether the catalog fetch is in flight
    pub loading_options: bool,
    /// Current facet selections
    pub selection: FilterSelection,
    /// Current page of results
    pub results: Vec<FilteredTitle>,
    /// 1-based page number of `results`
    pub current_page: u32,
    /// Total matches across all pages
    pub total_count: u64,
    /// Whether a submission is in flight
    pub is_loading: bool,
    /// Whether any submission happened on this page visit
    pub has_searched: bool,
    /// Error from the last submission
    pub error: Option<String>,
    /// Submission generation; late responses from superseded
    /// submissions are dropped on arrival.
    pub submit_seq: u64,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            options: FilterOptions::default(),
            options_loaded: false,
            loading_options: false,
            selection: FilterSelection::default(),
            results: Vec::new(),
            current_page: 1,
            total_count: 0,
            is_loading: false,
            has_searched: false,
            error: None,
            submit_seq: 0,
        }
    }
}

impl FilterState {
    pub fn phase(&self) -> FilterPhase {
        if self.is_loading {
            FilterPhase::Loading
        } else if self.error.is_some() {
            FilterPhase::Error
        } else if !self.has_searched {
            FilterPhase::Idle
        } else if self.results.is_empty() {
            FilterPhase::Empty
        } else {
            FilterPhase::Results
        }
    }

    pub fn total_pages(&self) -> u32 {
        self.total_count.div_ceil(u64::from(ITEMS_PER_PAGE)) as u32
    }

    /// Previous control: enabled past page 1 and while not loading.
    pub fn can_go_previous(&self) -> bool {
        self.current_page > 1 && !self.is_loading
    }

    /// Next control: enabled before the last page and while not loading.
    pub fn can_go_next(&self) -> bool {
        self.current_page < self.total_pages() && !self.is_loading
    }
}
