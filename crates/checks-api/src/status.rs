//! Check run lifecycle status and terminal conclusion.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a check run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ChecksStatus {
    Queued,
    InProgress,
    Completed,
}

impl ChecksStatus {
    /// Whether the check declares itself finished.
    pub fn is_completed(self) -> bool {
        self == ChecksStatus::Completed
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ChecksStatus::Queued => "queued",
            ChecksStatus::InProgress => "in_progress",
            ChecksStatus::Completed => "completed",
        }
    }
}

impl std::fmt::Display for ChecksStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal outcome of a completed check run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ChecksConclusion {
    Success,
    Failure,
    Neutral,
    Cancelled,
    Skipped,
    TimeOut,
    ActionRequired,
}

impl ChecksConclusion {
    pub fn as_str(self) -> &'static str {
        match self {
            ChecksConclusion::Success => "success",
            ChecksConclusion::Failure => "failure",
            ChecksConclusion::Neutral => "neutral",
            ChecksConclusion::Cancelled => "cancelled",
            ChecksConclusion::Skipped => "skipped",
            ChecksConclusion::TimeOut => "time_out",
            ChecksConclusion::ActionRequired => "action_required",
        }
    }
}

impl std::fmt::Display for ChecksConclusion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
