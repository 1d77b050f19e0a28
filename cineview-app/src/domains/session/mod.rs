//! Session domain: the one owner of the authenticated-user record, the
//! startup profile re-validation, and the global 401 policy.

pub mod cache;
pub mod messages;
pub mod types;
pub mod update;
pub mod validation;

pub use self::cache::{MemoryUserCache, UserCache};
pub use self::messages::Message;
pub use self::types::SessionState;
pub use self::update::{handle_event, update};
