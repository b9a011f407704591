use std::fmt::{Display, Formatter};

use serde::Serialize;
use strum_macros::{Display, IntoStaticStr};

use crate::error::PredictionError;

pub const FAILURE_MESSAGE: &str = "System Failure Imminent!";
pub const NORMAL_MESSAGE: &str = "System Operation is Normal.";
pub const INCONCLUSIVE_MESSAGE: &str = "System Info Inconclusive.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Failure predicted.
    Red,
    /// Normal operation.
    Green,
    /// No verdict could be reached.
    Orange,
}

/// Verdict for a single submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassificationOutcome {
    Failure,
    Normal,
    Inconclusive(String),
}

impl ClassificationOutcome {
    /// Maps a raw classifier label to a verdict; only `0` and `1` are valid.
    pub fn from_label(label: i64) -> Result<Self, PredictionError> {
        match label {
            1 => Ok(ClassificationOutcome::Failure),
            0 => Ok(ClassificationOutcome::Normal),
            other => Err(PredictionError::UnexpectedOutput(format!(
                "label {other} is neither 0 nor 1"
            ))),
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            ClassificationOutcome::Failure => Severity::Red,
            ClassificationOutcome::Normal => Severity::Green,
            ClassificationOutcome::Inconclusive(_) => Severity::Orange,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ClassificationOutcome::Failure => FAILURE_MESSAGE.to_string(),
            ClassificationOutcome::Normal => NORMAL_MESSAGE.to_string(),
            ClassificationOutcome::Inconclusive(reason) => {
                format!("{INCONCLUSIVE_MESSAGE} ({reason})")
            }
        }
    }

    pub fn status_line(&self) -> StatusLine {
        StatusLine {
            message: self.message(),
            severity: self.severity(),
        }
    }
}

/// What the presentation layer renders: one line, one color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusLine {
    pub message: String,
    pub severity: Severity,
}

impl Display for StatusLine {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Status: {}", self.message)
    }
}
