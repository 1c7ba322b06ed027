//! End-to-end publishing: resolve a context, build results, hand them over.

use std::sync::Arc;

use async_trait::async_trait;
use checks_api::{
    AnnotationLevel, CheckResult, CheckResultBuilder, ChecksAnnotationBuilder, ChecksConclusion,
    ChecksStatus,
};
use checks_github::fakes::{MemoryScmFacade, RecordingPublisher};
use checks_github::{
    publish_checks, CheckTarget, ChecksConfig, ChecksPublisher, Credentials, CredentialsKind,
    DiagnosticLog, FilteredLog, GitHubScmContext, GitHubScmSource, Job, PublishError,
    PublishOutcome, Run, ScmHead, ScmRevision, SkipReason,
};

fn job() -> Job {
    Job::new("app/main", "main")
}

fn run_context(facade: Arc<MemoryScmFacade>) -> GitHubScmContext {
    let run = Run::new(job(), 5);
    facade.set_run_revision(&run, ScmRevision::new(ScmHead::new("main"), "abc123"));
    GitHubScmContext::from_run(&run, "https://ci.example.com/job/app/5/", facade)
}

fn configured_facade() -> Arc<MemoryScmFacade> {
    let facade = MemoryScmFacade::new();
    facade.set_source(
        &job(),
        GitHubScmSource::new("octo", "app").with_credentials_id("gh-app"),
    );
    facade.add_credentials(&job(), Credentials::new("gh-app", CredentialsKind::GitHubApp));
    Arc::new(facade)
}

fn config() -> ChecksConfig {
    ChecksConfig::from_env().with_skip_publish(false)
}

fn completed(context: &GitHubScmContext) -> CheckResult {
    let annotation =
        ChecksAnnotationBuilder::single_line("src/lib.rs", 10, AnnotationLevel::Failure, "boom")
            .unwrap()
            .build();
    CheckResultBuilder::new("tests", ChecksStatus::Completed)
        .unwrap()
        .with_conclusion(ChecksConclusion::Failure)
        .unwrap()
        .with_details_url(context.url())
        .unwrap()
        .with_outputs(vec![annotation])
        .build()
        .unwrap()
}

#[tokio::test]
async fn publishes_each_transition_against_the_same_commit() {
    let context = run_context(configured_facade());
    let publisher = RecordingPublisher::new();
    let mut log = FilteredLog::new("checks");

    let queued = CheckResultBuilder::new("tests", ChecksStatus::Queued)
        .unwrap()
        .build()
        .unwrap();
    let done = completed(&context);

    for details in [&queued, &done] {
        let outcome = publish_checks(&context, details, &publisher, &config(), &mut log)
            .await
            .expect("publish");
        assert!(matches!(outcome, PublishOutcome::Published(_)));
    }

    let published = publisher.published();
    assert_eq!(published.len(), 2);
    assert_eq!(published[0].1.status(), ChecksStatus::Queued);
    assert_eq!(published[1].1.conclusion(), Some(ChecksConclusion::Failure));
    assert_eq!(
        published[1].1.details_url(),
        Some("https://ci.example.com/job/app/5/")
    );
    for (target, _) in &published {
        assert_eq!(
            target,
            &CheckTarget {
                repository: "octo/app".to_string(),
                head_sha: "abc123".to_string(),
                credentials_id: Some("gh-app".to_string()),
            }
        );
    }
    assert!(!log.has_errors());
}

#[tokio::test]
async fn invalid_context_is_skipped_with_diagnostics() {
    let context = run_context(Arc::new(MemoryScmFacade::new()));
    let publisher = RecordingPublisher::new();
    let mut log = FilteredLog::new("checks");

    let outcome = publish_checks(
        &context,
        &completed(&context),
        &publisher,
        &config(),
        &mut log,
    )
    .await
    .expect("skip is not an error");

    assert_eq!(outcome, PublishOutcome::Skipped(SkipReason::InvalidContext));
    assert!(publisher.published().is_empty());
    assert_eq!(log.error_messages(), ["Job does not use GitHub SCM"]);
}

#[tokio::test]
async fn disabled_publishing_skips_before_validation() {
    let context = run_context(Arc::new(MemoryScmFacade::new()));
    let publisher = RecordingPublisher::new();
    let mut log = FilteredLog::new("checks");

    let outcome = publish_checks(
        &context,
        &completed(&context),
        &publisher,
        &config().with_skip_publish(true),
        &mut log,
    )
    .await
    .unwrap();

    assert_eq!(outcome, PublishOutcome::Skipped(SkipReason::Disabled));
    assert!(log.info_messages().is_empty());
    assert!(publisher.published().is_empty());
}

struct RejectingPublisher;

#[async_trait]
impl ChecksPublisher for RejectingPublisher {
    async fn publish(
        &self,
        _target: &CheckTarget,
        _details: &CheckResult,
    ) -> checks_github::Result<()> {
        Err(PublishError::Rejected {
            status: 422,
            message: "No commit found for SHA".to_string(),
        })
    }
}

#[tokio::test]
async fn publisher_errors_propagate() {
    let context = run_context(configured_facade());
    let mut log = FilteredLog::new("checks");

    let err = publish_checks(
        &context,
        &completed(&context),
        &RejectingPublisher,
        &config(),
        &mut log,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, PublishError::Rejected { status: 422, .. }));
}

/// Caller-owned log sink that only keeps error lines.
#[derive(Default)]
struct ErrorLines(Vec<String>);

impl DiagnosticLog for ErrorLines {
    fn log_info(&mut self, _message: String) {}

    fn log_error(&mut self, message: String) {
        self.0.push(message);
    }
}

#[tokio::test]
async fn any_diagnostic_log_receives_the_validation_trail() {
    let facade = MemoryScmFacade::new();
    facade.set_source(&job(), GitHubScmSource::new("octo", "app"));
    let context = run_context(Arc::new(facade));
    let publisher = RecordingPublisher::new();
    let mut lines = ErrorLines::default();

    let outcome = publish_checks(
        &context,
        &completed(&context),
        &publisher,
        &config(),
        &mut lines,
    )
    .await
    .unwrap();

    assert_eq!(outcome, PublishOutcome::Skipped(SkipReason::InvalidContext));
    assert_eq!(lines.0, ["No credentials found"]);
    assert!(publisher.published().is_empty());
}
