//! Checks API - validated check run model
//!
//! Core entities published to a code-hosting checks service:
//! - `CheckResult`: status, conclusion, details URL, annotations and actions
//! - `ChecksAnnotation`: a severity-tagged comment on a line range of a file
//! - `ChecksAction`: a follow-up action offered to the user
//!
//! Every cross-field rule is enforced by the builders; a built value is
//! always valid and never mutated.

pub mod action;
pub mod annotation;
pub mod check_result;
pub mod error;
pub mod status;

pub use action::ChecksAction;
pub use annotation::{AnnotationLevel, ChecksAnnotation, ChecksAnnotationBuilder};
pub use check_result::{CheckResult, CheckResultBuilder};
pub use error::{ChecksError, Result};
pub use status::{ChecksConclusion, ChecksStatus};
