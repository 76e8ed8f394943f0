//! Application use cases

pub mod planning_service;

pub use planning_service::{
    plan_batch, plan_trip, BatchOutcome, BatchReport, LocationResolver, PlanningOptions, TripPlan,
    TripRequest,
};
