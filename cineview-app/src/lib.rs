//! Headless application core for the cineview catalog client.
//!
//! State lives in per-domain structs, mutations arrive as messages, and
//! side effects leave as [`common::Task`]s of futures that resolve back
//! into messages. The [`runtime::AppRuntime`] drives the loop; a GUI shell
//! would bind views onto the same state and feed the same messages.
#![allow(missing_docs)]

pub mod common;
pub mod domains;
pub mod runtime;
pub mod state;
pub mod testing;

pub use common::messages::{AppMessage, CrossDomainEvent, UpdateResult};
pub use common::task::Task;
pub use runtime::AppRuntime;
pub use state::AppState;
