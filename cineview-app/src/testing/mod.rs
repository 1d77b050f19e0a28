//! Test doubles for the integration suite. Compiled into the crate so
//! `tests/` targets and downstream consumers can share them.

pub mod stubs;

pub use stubs::{sample_user, search_hits, StubCatalogApi};
