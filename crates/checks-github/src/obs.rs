//! Structured tracing events for context resolution and publishing.
//!
//! Events are emitted at `info!`/`warn!` level with an `event` field so they
//! can be filtered (`RUST_LOG=checks_github=info`) or shipped as JSON
//! (`CHECKS_LOG_FORMAT=json`).

use tracing::{info, warn};

/// Span tagged with the job and check being published; attach it to the
/// publishing future with `tracing::Instrument`.
pub fn checks_span(job: &str, check_name: &str) -> tracing::Span {
    tracing::info_span!("checks.publish", job = %job, check = %check_name)
}

/// Emit event: a context finished resolving (values may be absent).
pub fn emit_context_resolved(
    job: &str,
    origin: &str,
    repository: Option<&str>,
    head_sha: Option<&str>,
) {
    info!(
        event = "checks.context_resolved",
        job = %job,
        origin = %origin,
        repository = repository.unwrap_or("-"),
        head_sha = head_sha.unwrap_or("-"),
    );
}

/// Emit event: a context failed pre-flight validation.
pub fn emit_validation_failed(job: &str, reason: &str) {
    warn!(event = "checks.validation_failed", job = %job, reason = %reason);
}

/// Emit event: a check result was handed to the publisher.
pub fn emit_check_published(repository: &str, head_sha: &str, check_name: &str, status: &str) {
    info!(
        event = "checks.published",
        repository = %repository,
        head_sha = %head_sha,
        check = %check_name,
        status = %status,
    );
}

/// Emit event: publishing was skipped.
pub fn emit_publish_skipped(job: &str, check_name: &str, reason: &str) {
    info!(event = "checks.publish_skipped", job = %job, check = %check_name, reason = %reason);
}
