//! The check run result published against a commit.
//!
//! A [`CheckResult`] is built once per status transition: a queued check, the
//! same check in progress, and finally the completed check with its
//! conclusion are three separate values, each from its own builder.

use serde::Serialize;
use url::Url;

use crate::action::ChecksAction;
use crate::annotation::ChecksAnnotation;
use crate::error::{ChecksError, Result};
use crate::status::{ChecksConclusion, ChecksStatus};

/// Immutable check run result.
///
/// `conclusion` is present exactly when `status` is
/// [`ChecksStatus::Completed`].
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CheckResult {
    name: String,
    status: ChecksStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    conclusion: Option<ChecksConclusion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details_url: Option<String>,
    outputs: Vec<ChecksAnnotation>,
    actions: Vec<ChecksAction>,
}

impl CheckResult {
    /// Stable name identifying the check across updates.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> ChecksStatus {
        self.status
    }

    /// `None` unless the check is completed.
    pub fn conclusion(&self) -> Option<ChecksConclusion> {
        self.conclusion
    }

    pub fn details_url(&self) -> Option<&str> {
        self.details_url.as_deref()
    }

    /// Annotations in the order they were supplied.
    pub fn outputs(&self) -> &[ChecksAnnotation] {
        &self.outputs
    }

    /// Actions in the order they were supplied.
    pub fn actions(&self) -> &[ChecksAction] {
        &self.actions
    }
}

/// Builder for [`CheckResult`].
#[derive(Debug, Clone)]
pub struct CheckResultBuilder {
    name: String,
    status: ChecksStatus,
    conclusion: Option<ChecksConclusion>,
    details_url: Option<String>,
    outputs: Vec<ChecksAnnotation>,
    actions: Vec<ChecksAction>,
}

impl CheckResultBuilder {
    /// Fails when `name` is blank.
    pub fn new(name: impl Into<String>, status: ChecksStatus) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ChecksError::BlankField { field: "check name" });
        }

        Ok(Self {
            name,
            status,
            conclusion: None,
            details_url: None,
            outputs: Vec::new(),
            actions: Vec::new(),
        })
    }

    /// Attach the terminal conclusion; only legal for completed checks.
    pub fn with_conclusion(mut self, conclusion: ChecksConclusion) -> Result<Self> {
        if !self.status.is_completed() {
            return Err(ChecksError::ConclusionRequiresCompleted {
                status: self.status,
            });
        }
        self.conclusion = Some(conclusion);
        Ok(self)
    }

    /// URL of a page with full details of the check, e.g. the build page.
    pub fn with_details_url(mut self, details_url: impl Into<String>) -> Result<Self> {
        let details_url = details_url.into();
        check_details_url(&details_url)?;
        self.details_url = Some(details_url);
        Ok(self)
    }

    pub fn with_outputs(mut self, outputs: Vec<ChecksAnnotation>) -> Self {
        self.outputs = outputs;
        self
    }

    pub fn with_actions(mut self, actions: Vec<ChecksAction>) -> Self {
        self.actions = actions;
        self
    }

    /// Fails with [`ChecksError::MissingConclusion`] for a completed check
    /// without a conclusion.
    pub fn build(self) -> Result<CheckResult> {
        match (self.status.is_completed(), self.conclusion) {
            (true, None) => return Err(ChecksError::MissingConclusion),
            (false, Some(_)) => {
                return Err(ChecksError::ConclusionRequiresCompleted {
                    status: self.status,
                })
            }
            _ => {}
        }

        Ok(CheckResult {
            name: self.name,
            status: self.status,
            conclusion: self.conclusion,
            details_url: self.details_url,
            outputs: self.outputs,
            actions: self.actions,
        })
    }
}

/// The URL must parse on its own, name a host, and be stored exactly as
/// given (the parser silently trims surrounding whitespace).
fn check_details_url(details_url: &str) -> Result<()> {
    let invalid = |reason: String| ChecksError::InvalidDetailsUrl {
        url: details_url.to_string(),
        reason,
    };

    if details_url.chars().any(char::is_whitespace) {
        return Err(invalid("contains whitespace".to_string()));
    }
    let parsed = Url::parse(details_url).map_err(|e| invalid(e.to_string()))?;
    if parsed.cannot_be_a_base() || parsed.host_str().map_or(true, str::is_empty) {
        return Err(invalid("missing host".to_string()));
    }
    Ok(())
}
