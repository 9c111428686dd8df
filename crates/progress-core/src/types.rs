use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::error::{ProgressError, Result};

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Completion status shared by milestones and features.
///
/// The set is closed: the wire strings are exactly `done`, `inprogress` and
/// `todo`, and anything else is rejected both by `FromStr` and by serde.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Done,
    InProgress,
    Todo,
}

impl Status {
    pub fn all() -> &'static [Status] {
        &[Status::Done, Status::InProgress, Status::Todo]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Done => "done",
            Status::InProgress => "inprogress",
            Status::Todo => "todo",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Status {
    type Err = ProgressError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "done" => Ok(Status::Done),
            "inprogress" => Ok(Status::InProgress),
            "todo" => Ok(Status::Todo),
            _ => Err(ProgressError::UnknownStatus(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Milestone / Feature
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub id: u32,
    pub title: String,
    pub status: Status,
    /// Completion fraction in [0, 1].
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub id: String,
    pub title: String,
    pub status: Status,
}

// ---------------------------------------------------------------------------
// ProgressPayload
// ---------------------------------------------------------------------------

/// Everything the dashboard shows. Milestones are kept in display order;
/// feature order carries no meaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressPayload {
    /// Overall completion fraction in [0, 1].
    pub overall: f64,
    pub milestones: Vec<Milestone>,
    pub features: Vec<Feature>,
}

impl ProgressPayload {
    /// Check the payload's invariants without modifying it.
    ///
    /// Fractions are never clamped; an out-of-range value is reported as
    /// `InvalidPayload` along with duplicate milestone or feature ids.
    pub fn validate(&self) -> Result<()> {
        let mut problems = Vec::new();

        if !in_unit_range(self.overall) {
            problems.push(format!("overall {} is outside [0, 1]", self.overall));
        }

        let mut milestone_ids = HashSet::new();
        for m in &self.milestones {
            if !milestone_ids.insert(m.id) {
                problems.push(format!("duplicate milestone id {}", m.id));
            }
            if !in_unit_range(m.percent) {
                problems.push(format!(
                    "milestone {} percent {} is outside [0, 1]",
                    m.id, m.percent
                ));
            }
        }

        let mut feature_ids = HashSet::new();
        for f in &self.features {
            if !feature_ids.insert(f.id.as_str()) {
                problems.push(format!("duplicate feature id '{}'", f.id));
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ProgressError::InvalidPayload(problems.join("; ")))
        }
    }

    /// Number of features with the given status.
    pub fn feature_count(&self, status: Status) -> usize {
        self.features.iter().filter(|f| f.status == status).count()
    }
}

fn in_unit_range(x: f64) -> bool {
    (0.0..=1.0).contains(&x)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
