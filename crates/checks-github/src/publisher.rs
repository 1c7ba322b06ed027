//! Publishing seam between resolved contexts and the checks service client.
//!
//! The network client is supplied by the caller through [`ChecksPublisher`];
//! its timeout and retry policy are its own. [`publish_checks`] validates the
//! context first and skips publishing, rather than failing, when the job
//! cannot be reported on.

use async_trait::async_trait;
use checks_api::CheckResult;
use tracing::{debug, Instrument};

use crate::config::ChecksConfig;
use crate::context::{CheckTarget, GitHubScmContext};
use crate::error::Result;
use crate::log::DiagnosticLog;
use crate::obs;

/// Client that submits a check result for a resolved target.
#[async_trait]
pub trait ChecksPublisher: Send + Sync {
    async fn publish(&self, target: &CheckTarget, details: &CheckResult) -> Result<()>;
}

/// Publisher used when nothing should leave the process.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullChecksPublisher;

#[async_trait]
impl ChecksPublisher for NullChecksPublisher {
    async fn publish(&self, target: &CheckTarget, details: &CheckResult) -> Result<()> {
        let payload = serde_json::to_string(details)?;
        debug!(
            repository = %target.repository,
            head_sha = %target.head_sha,
            bytes = payload.len(),
            "discarding check result"
        );
        Ok(())
    }
}

/// Why a check result was not published.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// `skip_publish` is set in the configuration.
    Disabled,
    /// The context failed validation; the log holds the details.
    InvalidContext,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::Disabled => "disabled",
            SkipReason::InvalidContext => "invalid_context",
        }
    }
}

/// Result of a [`publish_checks`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    Published(CheckTarget),
    Skipped(SkipReason),
}

/// Validate `context` and, if usable, hand `details` to `publisher`.
///
/// Validation failures are not errors: they produce
/// `PublishOutcome::Skipped(SkipReason::InvalidContext)` and leave their
/// diagnostic trail in `log`. Errors come only from the publisher.
///
/// `log` must be `Send` so the returned future can be spawned on a
/// multi-threaded runtime.
pub async fn publish_checks(
    context: &GitHubScmContext,
    details: &CheckResult,
    publisher: &dyn ChecksPublisher,
    config: &ChecksConfig,
    log: &mut (dyn DiagnosticLog + Send),
) -> Result<PublishOutcome> {
    let span = obs::checks_span(&context.job().full_name, details.name());
    publish_validated(context, details, publisher, config, log)
        .instrument(span)
        .await
}

async fn publish_validated(
    context: &GitHubScmContext,
    details: &CheckResult,
    publisher: &dyn ChecksPublisher,
    config: &ChecksConfig,
    log: &mut (dyn DiagnosticLog + Send),
) -> Result<PublishOutcome> {
    let job = &context.job().full_name;

    if config.skip_publish {
        obs::emit_publish_skipped(job, details.name(), SkipReason::Disabled.as_str());
        return Ok(PublishOutcome::Skipped(SkipReason::Disabled));
    }

    if !context.is_valid(log) {
        obs::emit_publish_skipped(job, details.name(), SkipReason::InvalidContext.as_str());
        return Ok(PublishOutcome::Skipped(SkipReason::InvalidContext));
    }

    let target = context.resolve_target()?;
    publisher.publish(&target, details).await?;
    obs::emit_check_published(
        &target.repository,
        &target.head_sha,
        details.name(),
        details.status().as_str(),
    );

    Ok(PublishOutcome::Published(target))
}
