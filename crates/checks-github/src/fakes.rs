//! In-memory fakes for the SCM facade and the publishing client (testing only)
//!
//! Provides `MemoryScmFacade` and `RecordingPublisher`, which satisfy the
//! trait contracts without a build system or network access.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use checks_api::CheckResult;

use crate::context::CheckTarget;
use crate::error::Result;
use crate::publisher::ChecksPublisher;
use crate::scm::*;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

// ---------------------------------------------------------------------------
// MemoryScmFacade
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
struct ScmState {
    /// job full name -> source
    sources: HashMap<String, GitHubScmSource>,
    /// job full name -> head
    heads: HashMap<String, ScmHead>,
    /// (repository slug, head name) -> current revision
    head_revisions: HashMap<(String, String), ScmRevision>,
    /// (job full name, run number) -> recorded revision
    run_revisions: HashMap<(String, u64), ScmRevision>,
    /// credentials id -> entry
    credentials: HashMap<String, Credentials>,
}

/// In-memory SCM facade. Head revisions can be moved with
/// [`MemoryScmFacade::advance_head`] to simulate pushes.
#[derive(Debug, Default)]
pub struct MemoryScmFacade {
    state: Mutex<ScmState>,
}

impl MemoryScmFacade {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_source(&self, job: &Job, source: GitHubScmSource) {
        lock(&self.state)
            .sources
            .insert(job.full_name.clone(), source);
    }

    pub fn set_head(&self, job: &Job, head: ScmHead) {
        lock(&self.state).heads.insert(job.full_name.clone(), head);
    }

    pub fn set_head_revision(&self, source: &GitHubScmSource, revision: ScmRevision) {
        lock(&self.state)
            .head_revisions
            .insert((source.slug(), revision.head.name.clone()), revision);
    }

    /// Point `head` of `source` at a new commit.
    pub fn advance_head(&self, source: &GitHubScmSource, head: &ScmHead, hash: &str) {
        self.set_head_revision(source, ScmRevision::new(head.clone(), hash));
    }

    pub fn set_run_revision(&self, run: &Run, revision: ScmRevision) {
        lock(&self.state)
            .run_revisions
            .insert((run.job.full_name.clone(), run.number), revision);
    }

    pub fn add_credentials(&self, _job: &Job, credentials: Credentials) {
        lock(&self.state)
            .credentials
            .insert(credentials.id.clone(), credentials);
    }
}

impl ScmFacade for MemoryScmFacade {
    fn find_github_source(&self, job: &Job) -> Option<GitHubScmSource> {
        lock(&self.state).sources.get(&job.full_name).cloned()
    }

    fn find_run_revision(&self, _source: &GitHubScmSource, run: &Run) -> Option<ScmRevision> {
        lock(&self.state)
            .run_revisions
            .get(&(run.job.full_name.clone(), run.number))
            .cloned()
    }

    fn find_head(&self, job: &Job) -> Option<ScmHead> {
        lock(&self.state).heads.get(&job.full_name).cloned()
    }

    fn find_head_revision(
        &self,
        source: &GitHubScmSource,
        head: &ScmHead,
    ) -> Option<ScmRevision> {
        lock(&self.state)
            .head_revisions
            .get(&(source.slug(), head.name.clone()))
            .cloned()
    }

    fn find_credentials(&self, _job: &Job, credentials_id: &str) -> Option<Credentials> {
        lock(&self.state).credentials.get(credentials_id).cloned()
    }
}

// ---------------------------------------------------------------------------
// RecordingPublisher
// ---------------------------------------------------------------------------

/// Publisher that records every call instead of sending it.
#[derive(Debug, Default)]
pub struct RecordingPublisher {
    published: Mutex<Vec<(CheckTarget, CheckResult)>>,
}

impl RecordingPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything published so far, oldest first.
    pub fn published(&self) -> Vec<(CheckTarget, CheckResult)> {
        lock(&self.published).clone()
    }
}

#[async_trait]
impl ChecksPublisher for RecordingPublisher {
    async fn publish(&self, target: &CheckTarget, details: &CheckResult) -> Result<()> {
        lock(&self.published).push((target.clone(), details.clone()));
        Ok(())
    }
}
