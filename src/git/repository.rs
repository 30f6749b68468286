use crate::error::Result;
use crate::git::TagSource;
use git2::Repository;
use std::path::Path;

/// Tag source backed by a git repository through the `git2` crate.
///
/// Listing tags is a single in-process query; no network access, no writes.
pub struct Git2TagSource {
    repo: Repository,
}

impl Git2TagSource {
    /// Open or discover a git repository at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path)?;

        Ok(Git2TagSource { repo })
    }

    /// Create from an existing git2::Repository
    pub fn from_git2(repo: Repository) -> Self {
        Git2TagSource { repo }
    }
}

impl TagSource for Git2TagSource {
    fn list_tag_names(&self, prefix: &str) -> Result<Vec<String>> {
        let names = self.repo.tag_names(None)?;

        Ok(names
            .iter()
            .flatten()
            .filter(|name| name.starts_with(prefix))
            .map(str::to_string)
            .collect())
    }
}
