//! Home page search domain: the type-ahead suggestion engine and the
//! committed search result set it must never collide with.

pub mod messages;
pub mod types;
pub mod update;

pub use self::messages::Message;
pub use self::types::{SearchState, SUGGESTION_DEBOUNCE, SUGGESTION_LIMIT};
pub use self::update::update;
