pub mod messages;
pub mod task;

pub use messages::{
    AppMessage, CrossDomainEvent, FetchError, Fetched, UpdateResult,
};
pub use task::Task;
