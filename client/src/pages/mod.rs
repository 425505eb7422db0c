//! Page modules for route-level screens.
//!
//! Each page owns route-scoped orchestration (form parsing, validation,
//! submission) and delegates rendering details to `components`.

pub mod home;
pub mod interest_rate;
pub mod loan_eligibility;
