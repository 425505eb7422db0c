//! Networking modules for the REST boundary.
//!
//! `api` handles the eligibility call, `types` re-exports the shared wire
//! schema for view code.

pub mod api;
pub mod types;
