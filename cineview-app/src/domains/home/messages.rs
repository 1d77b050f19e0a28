use cineview_model::TitleSummary;

use crate::common::messages::Fetched;

/// Home rails messages
#[derive(Clone, Debug)]
pub enum Message {
    /// Fetch both rails
    LoadRails,
    TrendingLoaded(Fetched<Vec<TitleSummary>>),
    TopRatedLoaded(Fetched<Vec<TitleSummary>>),
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoadRails => "LoadRails",
            Self::TrendingLoaded(_) => "TrendingLoaded",
            Self::TopRatedLoaded(_) => "TopRatedLoaded",
        }
    }
}
