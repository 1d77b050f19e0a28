use cineview_model::TitleSummary;

/// Titles requested per rail.
pub const RAIL_LIMIT: u32 = 6;

/// Home page rails state
#[derive(Debug, Clone, Default)]
pub struct HomeState {
    pub trending: Vec<TitleSummary>,
    pub top_rated: Vec<TitleSummary>,
    pub trending_loading: bool,
    pub top_rated_loading: bool,
    /// Shared inline error for the rails section
    pub error: Option<String>,
}
