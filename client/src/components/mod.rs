//! Reusable UI component modules.
//!
//! Components are presentational: they take typed props and render, leaving
//! orchestration (parsing, validation, network) to the pages.

pub mod eligibility_result;
pub mod navbar;
pub mod rate_table;
