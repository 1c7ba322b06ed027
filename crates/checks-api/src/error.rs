//! Argument errors raised while building check run values.

use crate::status::ChecksStatus;

/// Errors produced by the annotation, action and check result builders.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChecksError {
    #[error("{field} must not be blank")]
    BlankField { field: &'static str },

    #[error("start line {start_line} must not be after end line {end_line}")]
    InvalidLineRange { start_line: u32, end_line: u32 },

    #[error(
        "start line and end line must be the same when adding column, \
         start line: {start_line}, end line: {end_line}"
    )]
    ColumnsRequireSingleLine { start_line: u32, end_line: u32 },

    #[error("{field} exceeds {limit} {unit}: got {actual}")]
    FieldTooLong {
        field: &'static str,
        limit: usize,
        actual: usize,
        unit: &'static str,
    },

    #[error("status must be completed when setting conclusion, got {status}")]
    ConclusionRequiresCompleted { status: ChecksStatus },

    #[error("conclusion must be set when status is completed")]
    MissingConclusion,

    #[error("details URL must be absolute with a host: {url} ({reason})")]
    InvalidDetailsUrl { url: String, reason: String },
}

/// Result type for check run construction.
pub type Result<T> = std::result::Result<T, ChecksError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_error_names_both_lines() {
        let err = ChecksError::ColumnsRequireSingleLine {
            start_line: 3,
            end_line: 7,
        };
        let msg = err.to_string();
        assert!(msg.contains("start line: 3"));
        assert!(msg.contains("end line: 7"));
    }

    #[test]
    fn test_conclusion_error_names_status() {
        let err = ChecksError::ConclusionRequiresCompleted {
            status: ChecksStatus::InProgress,
        };
        assert!(err.to_string().contains("in_progress"));
    }

    #[test]
    fn test_field_too_long_display() {
        let err = ChecksError::FieldTooLong {
            field: "title",
            limit: 255,
            actual: 300,
            unit: "characters",
        };
        assert_eq!(err.to_string(), "title exceeds 255 characters: got 300");
    }
}
