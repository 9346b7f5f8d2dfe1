use crate::error::Result;
use crate::git::TagSource;
use git2::Repository as Git2Repo;
use std::path::Path;
use std::sync::Mutex;

/// Tag source backed by a local git repository
pub struct Git2TagSource {
    // git2::Repository is Send but not Sync.
    repo: Mutex<Git2Repo>,
}

impl Git2TagSource {
    /// Open or discover a git repository at or above `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2TagSource::from_git2(repo))
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2TagSource {
            repo: Mutex::new(repo),
        }
    }
}

impl TagSource for Git2TagSource {
    fn list_tags(&self) -> Result<Vec<String>> {
        let repo = self
            .repo
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let tags = repo.tag_names(None)?;

        Ok(tags.iter().flatten().map(|s| s.to_string()).collect())
    }
}
