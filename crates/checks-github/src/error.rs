//! Resolution and publishing errors.

/// An accessor was called on a context that could not resolve the value.
///
/// Callers are expected to check [`GitHubScmContext::is_valid`] first, so
/// these indicate misuse rather than a recoverable condition.
///
/// [`GitHubScmContext::is_valid`]: crate::context::GitHubScmContext::is_valid
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolutionError {
    #[error("No GitHub SCM source found for job: {job}")]
    NoSource { job: String },

    #[error("No SHA found for job: {job}")]
    NoHeadSha { job: String },
}

/// Errors surfaced by a [`ChecksPublisher`](crate::publisher::ChecksPublisher).
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("resolution error: {0}")]
    Resolution(#[from] ResolutionError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("checks service rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },
}

/// Result type for publishing operations.
pub type Result<T> = std::result::Result<T, PublishError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_errors_name_the_job() {
        let err = ResolutionError::NoHeadSha {
            job: "app/main".to_string(),
        };
        assert_eq!(err.to_string(), "No SHA found for job: app/main");

        let err = ResolutionError::NoSource {
            job: "app/main".to_string(),
        };
        assert_eq!(err.to_string(), "No GitHub SCM source found for job: app/main");
    }

    #[test]
    fn test_publish_error_wraps_resolution() {
        let err: PublishError = ResolutionError::NoSource {
            job: "app".to_string(),
        }
        .into();
        assert!(err.to_string().contains("resolution error"));
        assert!(err.to_string().contains("app"));
    }

    #[test]
    fn test_rejected_display() {
        let err = PublishError::Rejected {
            status: 422,
            message: "head_sha is not a commit".to_string(),
        };
        assert!(err.to_string().contains("422"));
        assert!(err.to_string().contains("head_sha"));
    }
}
