//! Source-control collaborator interface.
//!
//! These traits and handles describe what the build system and its SCM
//! integration expose to context resolution:
//! - `Job` / `Run`: the build being reported on
//! - `GitHubScmSource`: the GitHub repository a job is configured against
//! - `ScmHead` / `ScmRevision`: a reference and the commit it pointed at
//! - `ScmFacade`: lookups between the above, plus the credential store
//!
//! All lookups are synchronous and expected to be local; network access
//! belongs to the publishing client.

use serde::{Deserialize, Serialize};

/// A build job, identified by its full name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Job {
    /// Stable identity, e.g. `org/app/main`.
    pub full_name: String,
    /// Display name, e.g. `main`.
    pub name: String,
}

impl Job {
    pub fn new(full_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            name: name.into(),
        }
    }
}

impl std::fmt::Display for Job {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full_name)
    }
}

/// One execution of a job.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Run {
    pub job: Job,
    pub number: u64,
}

impl Run {
    pub fn new(job: Job, number: u64) -> Self {
        Self { job, number }
    }

    pub fn parent(&self) -> &Job {
        &self.job
    }
}

impl std::fmt::Display for Run {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} #{}", self.job.full_name, self.number)
    }
}

/// A branch, tag or pull request reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScmHead {
    pub name: String,
}

impl ScmHead {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// The revision a head resolved to at some point in time.
///
/// `hash` is absent for revisions that do not carry a commit (e.g. a pull
/// request whose merge commit has not been computed yet).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScmRevision {
    pub head: ScmHead,
    pub hash: Option<String>,
}

impl ScmRevision {
    pub fn new(head: ScmHead, hash: impl Into<String>) -> Self {
        Self {
            head,
            hash: Some(hash.into()),
        }
    }

    pub fn without_hash(head: ScmHead) -> Self {
        Self { head, hash: None }
    }
}

/// A job's GitHub source configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubScmSource {
    pub repo_owner: String,
    pub repository: String,
    pub credentials_id: Option<String>,
}

impl GitHubScmSource {
    pub fn new(repo_owner: impl Into<String>, repository: impl Into<String>) -> Self {
        Self {
            repo_owner: repo_owner.into(),
            repository: repository.into(),
            credentials_id: None,
        }
    }

    pub fn with_credentials_id(mut self, credentials_id: impl Into<String>) -> Self {
        self.credentials_id = Some(credentials_id.into());
        self
    }

    /// `owner/name`
    pub fn slug(&self) -> String {
        format!("{}/{}", self.repo_owner, self.repository)
    }
}

/// Kind of a stored credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialsKind {
    GitHubApp,
    UsernamePassword,
    Other,
}

/// A credential entry from the credential store. Secrets never leave the
/// store; only the identity and kind are visible here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub id: String,
    pub kind: CredentialsKind,
}

impl Credentials {
    pub fn new(id: impl Into<String>, kind: CredentialsKind) -> Self {
        Self {
            id: id.into(),
            kind,
        }
    }

    /// The checks API only accepts GitHub App installations.
    pub fn is_github_app(&self) -> bool {
        self.kind == CredentialsKind::GitHubApp
    }
}

/// Lookups into the build system's SCM integration and credential store.
pub trait ScmFacade: Send + Sync {
    /// The job's GitHub source, if it is configured with one.
    fn find_github_source(&self, job: &Job) -> Option<GitHubScmSource>;

    /// The revision recorded for a specific run.
    fn find_run_revision(&self, source: &GitHubScmSource, run: &Run) -> Option<ScmRevision>;

    /// The reference the job currently builds.
    fn find_head(&self, job: &Job) -> Option<ScmHead>;

    /// The current revision of a reference.
    fn find_head_revision(&self, source: &GitHubScmSource, head: &ScmHead)
        -> Option<ScmRevision>;

    /// Commit hash of a revision; blank hashes count as absent.
    fn find_hash(&self, revision: &ScmRevision) -> Option<String> {
        revision
            .hash
            .as_deref()
            .map(str::trim)
            .filter(|hash| !hash.is_empty())
            .map(str::to_string)
    }

    /// Credential store lookup, scoped to the job.
    fn find_credentials(&self, job: &Job, credentials_id: &str) -> Option<Credentials>;
}
