//! Service layer: orchestration between routes and the prediction client.

pub mod eligibility;
