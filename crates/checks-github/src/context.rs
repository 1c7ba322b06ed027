//! Resolves which repository and commit a check result belongs to.
//!
//! A [`GitHubScmContext`] is built either from a run or from a job:
//! - from a run, the head SHA is the revision recorded for that run, frozen
//!   even if the branch moves later;
//! - from a job, the head SHA is the current revision of the job's head, so
//!   two contexts built at different times may disagree.
//!
//! Resolution happens once, in the constructor. Missing values (no GitHub
//! source, no head, no revision, no hash) resolve to absent rather than
//! erroring; the accessors report them as [`ResolutionError`]s and
//! [`GitHubScmContext::is_valid`] turns them into a logged `false`.

use std::sync::Arc;

use serde::Serialize;

use crate::error::ResolutionError;
use crate::log::DiagnosticLog;
use crate::obs;
use crate::scm::{GitHubScmSource, Job, Run, ScmFacade};

/// What the head SHA was resolved from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HeadResolution {
    /// The revision recorded by run `number`.
    Run { number: u64 },
    /// The job's head at construction time.
    Job,
}

impl HeadResolution {
    pub fn as_str(&self) -> &'static str {
        match self {
            HeadResolution::Run { .. } => "run",
            HeadResolution::Job => "job",
        }
    }
}

/// Fully resolved coordinates for publishing a check result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckTarget {
    /// `owner/name`
    pub repository: String,
    pub head_sha: String,
    pub credentials_id: Option<String>,
}

/// Checks context for a job configured with a GitHub source.
pub struct GitHubScmContext {
    job: Job,
    url: String,
    origin: HeadResolution,
    source: Option<GitHubScmSource>,
    head_sha: Option<String>,
    facade: Arc<dyn ScmFacade>,
}

impl GitHubScmContext {
    /// Resolve against the revision recorded for `run`.
    pub fn from_run(run: &Run, run_url: impl Into<String>, facade: Arc<dyn ScmFacade>) -> Self {
        let job = run.parent().clone();
        let source = facade.find_github_source(&job);
        let head_sha = source.as_ref().and_then(|source| {
            let revision = facade.find_run_revision(source, run)?;
            facade.find_hash(&revision)
        });

        Self::resolved(
            job,
            run_url.into(),
            HeadResolution::Run { number: run.number },
            source,
            head_sha,
            facade,
        )
    }

    /// Resolve against the job's current head.
    pub fn from_job(job: &Job, job_url: impl Into<String>, facade: Arc<dyn ScmFacade>) -> Self {
        let source = facade.find_github_source(job);
        let head_sha = source.as_ref().and_then(|source| {
            let head = facade.find_head(job)?;
            let revision = facade.find_head_revision(source, &head)?;
            facade.find_hash(&revision)
        });

        Self::resolved(
            job.clone(),
            job_url.into(),
            HeadResolution::Job,
            source,
            head_sha,
            facade,
        )
    }

    fn resolved(
        job: Job,
        url: String,
        origin: HeadResolution,
        source: Option<GitHubScmSource>,
        head_sha: Option<String>,
        facade: Arc<dyn ScmFacade>,
    ) -> Self {
        let slug = source.as_ref().map(GitHubScmSource::slug);
        obs::emit_context_resolved(
            &job.full_name,
            origin.as_str(),
            slug.as_deref(),
            head_sha.as_deref(),
        );

        Self {
            job,
            url,
            origin,
            source,
            head_sha,
            facade,
        }
    }

    pub fn job(&self) -> &Job {
        &self.job
    }

    /// URL of the run or job page; the natural details URL for the check.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn origin(&self) -> HeadResolution {
        self.origin
    }

    pub fn head_sha(&self) -> Result<&str, ResolutionError> {
        self.head_sha
            .as_deref()
            .ok_or_else(|| ResolutionError::NoHeadSha {
                job: self.job.full_name.clone(),
            })
    }

    /// `owner/name` of the job's GitHub source.
    pub fn repository(&self) -> Result<String, ResolutionError> {
        self.source
            .as_ref()
            .map(GitHubScmSource::slug)
            .ok_or_else(|| ResolutionError::NoSource {
                job: self.job.full_name.clone(),
            })
    }

    /// Credentials configured on the source, if any.
    pub fn credentials_id(&self) -> Option<&str> {
        self.source.as_ref()?.credentials_id.as_deref()
    }

    /// Repository, head SHA and credentials id in one value.
    pub fn resolve_target(&self) -> Result<CheckTarget, ResolutionError> {
        Ok(CheckTarget {
            repository: self.repository()?,
            head_sha: self.head_sha()?.to_string(),
            credentials_id: self.credentials_id().map(str::to_string),
        })
    }

    /// Pre-flight check before publishing.
    ///
    /// Checks, stopping at the first failure: the job has a GitHub source,
    /// its credentials are usable GitHub App credentials, and a head SHA was
    /// resolved. Each failure leaves a distinct line in `logger`.
    pub fn is_valid(&self, logger: &mut dyn DiagnosticLog) -> bool {
        logger.log_info("Trying to resolve checks parameters from GitHub SCM...".to_string());

        let Some(source) = &self.source else {
            self.fail(logger, "Job does not use GitHub SCM".to_string());
            return false;
        };

        if !self.has_valid_credentials(logger) {
            return false;
        }

        if self.head_sha.is_none() {
            self.fail(logger, format!("No HEAD SHA found for {}", source.slug()));
            return false;
        }

        true
    }

    /// Whether the source's credentials exist and belong to a GitHub App.
    pub fn has_valid_credentials(&self, logger: &mut dyn DiagnosticLog) -> bool {
        let Some(credentials_id) = self.credentials_id() else {
            self.fail(logger, "No credentials found".to_string());
            return false;
        };

        match self.facade.find_credentials(&self.job, credentials_id) {
            None => {
                self.fail(
                    logger,
                    format!("No credentials found for id '{credentials_id}'"),
                );
                false
            }
            Some(credentials) if !credentials.is_github_app() => {
                self.fail(
                    logger,
                    format!(
                        "No GitHub APP credentials found for id '{credentials_id}', \
                         the GitHub checks API requires GitHub App credentials"
                    ),
                );
                false
            }
            Some(_) => true,
        }
    }

    fn fail(&self, logger: &mut dyn DiagnosticLog, message: String) {
        obs::emit_validation_failed(&self.job.full_name, &message);
        logger.log_error(message);
    }
}

impl std::fmt::Debug for GitHubScmContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubScmContext")
            .field("job", &self.job)
            .field("url", &self.url)
            .field("origin", &self.origin)
            .field("source", &self.source)
            .field("head_sha", &self.head_sha)
            .finish_non_exhaustive()
    }
}
