//! Checks GitHub - context resolution for publishing check runs
//!
//! Given a build job or run, works out where its check result goes:
//! - `GitHubScmContext`: resolves repository slug, head SHA and credentials
//!   through an `ScmFacade`, and validates them before publishing
//! - `publish_checks`: validates a context and hands a `CheckResult` to a
//!   `ChecksPublisher`
//!
//! In-memory fakes for the SCM facade and the publisher live in `fakes`.

pub mod config;
pub mod context;
pub mod error;
pub mod fakes;
pub mod log;
pub mod obs;
pub mod publisher;
pub mod scm;
pub mod telemetry;

pub use config::ChecksConfig;
pub use context::{CheckTarget, GitHubScmContext, HeadResolution};
pub use error::{PublishError, ResolutionError, Result};
pub use log::{DiagnosticLog, FilteredLog};
pub use publisher::{
    publish_checks, ChecksPublisher, NullChecksPublisher, PublishOutcome, SkipReason,
};
pub use scm::{
    Credentials, CredentialsKind, GitHubScmSource, Job, Run, ScmFacade, ScmHead, ScmRevision,
};
pub use telemetry::init_tracing;
