use std::fmt;

use serde::{Deserialize, Serialize};

/// Complaint seriousness on a 1 (minor) to 5 (critical) scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Severity(u8);

impl Severity {
    pub const MIN: Severity = Severity(1);
    pub const MAX: Severity = Severity(5);

    /// Buckets a capped total score into a severity level.
    pub fn from_score(total_score: u32) -> Self {
        let level = match total_score {
            90.. => 5,
            70..=89 => 4,
            50..=69 => 3,
            30..=49 => 2,
            _ => 1,
        };
        Severity(level)
    }

    pub fn new(level: u8) -> Option<Self> {
        (Self::MIN.0..=Self::MAX.0)
            .contains(&level)
            .then_some(Severity(level))
    }

    pub fn level(self) -> u8 {
        self.0
    }

    pub fn priority(self) -> Priority {
        match self.0 {
            5 => Priority::P1,
            4 => Priority::P2,
            3 => Priority::P3,
            _ => Priority::P4,
        }
    }

    pub fn risk(self) -> Risk {
        match self.0 {
            4.. => Risk::High,
            3 => Risk::Medium,
            _ => Risk::Low,
        }
    }
}

impl TryFrom<u8> for Severity {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Severity::new(value).ok_or_else(|| format!("severity must be between 1 and 5, got {value}"))
    }
}

impl From<Severity> for u8 {
    fn from(value: Severity) -> Self {
        value.0
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/5", self.0)
    }
}

/// Support queue priority, P1 being the most urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    P1,
    P2,
    P3,
    P4,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::P1 => "P1",
            Priority::P2 => "P2",
            Priority::P3 => "P3",
            Priority::P4 => "P4",
        }
    }

    /// Routing guidance shown alongside a scored complaint.
    pub fn recommended_action(self) -> &'static str {
        match self {
            Priority::P1 => "Immediate escalation to Trust & Safety team required.",
            Priority::P2 => "Assign to Senior Support Agent within 4 hours.",
            Priority::P3 | Priority::P4 => "Standard routing to General Support queue.",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Coarse business risk used for dashboard aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Risk {
    High,
    Medium,
    Low,
}

impl Risk {
    pub fn label(self) -> &'static str {
        match self {
            Risk::High => "High",
            Risk::Medium => "Medium",
            Risk::Low => "Low",
        }
    }

    /// Lower-case form stored on ticket records.
    pub fn level(self) -> &'static str {
        match self {
            Risk::High => "high",
            Risk::Medium => "medium",
            Risk::Low => "low",
        }
    }
}

impl fmt::Display for Risk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
