//! Wire-schema re-exports for view code.
//!
//! The schema lives in the shared `types` crate so the server uses the same
//! definitions; pages and components import through here.

pub use types::{
    BankOffer, EmploymentStatus, LoanApplication, LoanType, PredictionResult, RateQuote,
    RateRequest,
};
