//! Duty log entries

use serde::{Deserialize, Serialize};

/// Duty status of a log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DutyKind {
    Driving,
    Rest,
    Pickup,
    Dropoff,
}

impl DutyKind {
    pub fn label(&self) -> &'static str {
        match self {
            DutyKind::Driving => "driving",
            DutyKind::Rest => "rest",
            DutyKind::Pickup => "pickup",
            DutyKind::Dropoff => "dropoff",
        }
    }

    /// On duty but not driving (loading/unloading)
    pub fn is_on_duty_not_driving(&self) -> bool {
        matches!(self, DutyKind::Pickup | DutyKind::Dropoff)
    }
}

impl std::fmt::Display for DutyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One chronological record in the driver's log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DutyLogEntry {
    pub activity: String,
    pub duration_hours: f64,
    pub kind: DutyKind,
}

impl DutyLogEntry {
    pub fn new(activity: impl Into<String>, duration_hours: f64, kind: DutyKind) -> Self {
        Self {
            activity: activity.into(),
            duration_hours,
            kind,
        }
    }

    pub fn is_driving(&self) -> bool {
        self.kind == DutyKind::Driving
    }
}
