//! Filter domain messages

use cineview_client::FilterPage;
use cineview_model::{FilterOptions, SortKey};

use crate::common::messages::Fetched;

/// Filter domain messages
#[derive(Clone, Debug)]
pub enum Message {
    // Page lifecycle
    /// Fetch the option catalog (once per page mount)
    LoadOptions,
    /// Option catalog fetch settled
    OptionsLoaded(Fetched<FilterOptions>),

    // User actions
    /// Toggle a genre id in or out of the selection
    ToggleGenre(String),
    /// Toggle a type id in or out of the selection
    ToggleType(String),
    /// Toggle a status id in or out of the selection
    ToggleStatus(String),
    /// Toggle a year id in or out of the selection
    ToggleYear(String),
    /// Change the sort order
    SetSortKey(SortKey),
    /// Run the search with the current selection, from page 1
    Submit,
    /// Jump to a page of the current search
    GoToPage(u32),

    // Internal events
    /// A submission settled; `seq` identifies which one
    ResultsLoaded {
        seq: u64,
        page: u32,
        result: Fetched<FilterPage>,
    },
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoadOptions => "LoadOptions",
            Self::OptionsLoaded(_) => "OptionsLoaded",
            Self::ToggleGenre(_) => "ToggleGenre",
            Self::ToggleType(_) => "ToggleType",
            Self::ToggleStatus(_) => "ToggleStatus",
            Self::ToggleYear(_) => "ToggleYear",
            Self::SetSortKey(_) => "SetSortKey",
            Self::Submit => "Submit",
            Self::GoToPage(_) => "GoToPage",
            Self::ResultsLoaded { .. } => "ResultsLoaded",
        }
    }
}
