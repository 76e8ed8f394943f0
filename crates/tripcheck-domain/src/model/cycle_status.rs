//! Cycle budget status derived from remaining hours

use serde::{Deserialize, Serialize};

/// Where the driver stands in the 70-hour / 8-day cycle after the trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CycleStatus {
    /// Hours remain above the warning threshold
    Compliant,
    /// Still legal, but fewer hours left than the warning threshold
    LowHours,
    /// The trip's driving pushes the cycle past 70 hours
    Violation,
}

impl CycleStatus {
    pub fn from_hours_remaining(hours_remaining: f64, warning_threshold: f64) -> Self {
        if hours_remaining < 0.0 {
            CycleStatus::Violation
        } else if hours_remaining < warning_threshold {
            CycleStatus::LowHours
        } else {
            CycleStatus::Compliant
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CycleStatus::Compliant => "Compliant",
            CycleStatus::LowHours => "Warning: Low Hours Remaining",
            CycleStatus::Violation => "Violation: Cycle Limit Exceeded",
        }
    }
}
