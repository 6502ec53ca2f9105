//! Application use cases

pub mod plan_service;

pub use plan_service::{run_loading_plan, PlanOptions, PlanOutcome};
