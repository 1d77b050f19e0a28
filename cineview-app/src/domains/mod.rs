//! Application domains. Each owns its slice of state, its message enum,
//! and an update function; coordination happens over cross-domain events.

pub mod detail;
pub mod filter;
pub mod home;
pub mod navigation;
pub mod profile;
pub mod search;
pub mod session;
