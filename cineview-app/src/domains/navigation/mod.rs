//! Navigation domain: routes, the context payload that rides along with
//! a transition, and the arrival hooks that keep page state honest.

pub mod messages;
pub mod types;
pub mod update;

pub use self::messages::Message;
pub use self::types::{NavContext, NavigationState, Route};
pub use self::update::{handle_event, update};
