//! Utility helpers shared across client UI modules.
//!
//! Pure functions only: money formatting and the quote simulation live here
//! so pages and components stay thin and the logic stays unit-testable.

pub mod money;
pub mod quote;
