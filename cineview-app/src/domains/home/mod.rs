//! Home page rails: trending and top-rated titles.

pub mod messages;
pub mod types;
pub mod update;

pub use self::messages::Message;
pub use self::types::{HomeState, RAIL_LIMIT};
pub use self::update::update;
