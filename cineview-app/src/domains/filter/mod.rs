//! Faceted filter domain: multi-select facets, pull-only submission, and
//! windowed pagination over the result pages.

pub mod messages;
pub mod pagination;
pub mod types;
pub mod update;

pub use self::messages::Message;
pub use self::pagination::{page_window, PageItem};
pub use self::types::{FilterPhase, FilterSelection, FilterState, ITEMS_PER_PAGE};
pub use self::update::update;
