//! Domain services

pub mod geo;
pub mod hos_engine;
pub mod timeline;
pub mod trip_report;

pub use hos_engine::{build_duty_log, evaluate_cycle, plan_trip, CycleVerdict, DutyLog};
pub use timeline::{build_timeline, summarize_by_day, DailyDutySummary, TimelineEntry};
pub use trip_report::{format_hours, generate_trip_report};
