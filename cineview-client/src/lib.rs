//! HTTP gateway client for the cineview catalog backend.
//!
//! This crate centralizes request construction, the cookie-backed session,
//! envelope unwrapping, and the error taxonomy. Application domains depend
//! on the [`CatalogApi`] trait only, never on reqwest directly, so tests can
//! substitute a programmable stub at the same seam.

pub mod api;
pub mod client;
pub mod config;
pub mod error;

pub use api::{CatalogApi, FilterPage};
pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};
