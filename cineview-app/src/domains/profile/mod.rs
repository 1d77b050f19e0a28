//! Profile page: the user's own reviews and watchlist.

pub mod messages;
pub mod types;
pub mod update;

pub use self::messages::Message;
pub use self::types::ProfileState;
pub use self::update::update;
