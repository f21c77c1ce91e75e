use crate::error::{ChangelogError, Result};
use crate::git::Repository;

/// Mock repository for testing without actual git operations
///
/// History is a single line of commits, oldest first; tags point at an
/// index into that line.
#[derive(Debug, Default)]
pub struct MockRepository {
    commits: Vec<String>,
    tags: Vec<(String, usize)>,
    fail_tags: bool,
    fail_log: bool,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a commit on top of the current history
    pub fn add_commit(&mut self, subject: impl Into<String>) {
        self.commits.push(subject.into());
    }

    /// Tag the most recent commit
    pub fn add_tag(&mut self, name: impl Into<String>) {
        let head = self.commits.len().saturating_sub(1);
        self.tags.push((name.into(), head));
    }

    /// Make `list_tags` fail
    pub fn fail_tag_listing(&mut self) {
        self.fail_tags = true;
    }

    /// Make `commit_subjects` fail
    pub fn fail_commit_log(&mut self) {
        self.fail_log = true;
    }
}

impl Repository for MockRepository {
    fn list_tags(&self) -> Result<Vec<String>> {
        if self.fail_tags {
            return Err(ChangelogError::Git(git2::Error::from_str(
                "mock tag listing failure",
            )));
        }
        Ok(self.tags.iter().map(|(name, _)| name.clone()).collect())
    }

    fn commit_subjects(&self, since: Option<&str>) -> Result<Vec<String>> {
        if self.fail_log {
            return Err(ChangelogError::Git(git2::Error::from_str(
                "mock commit log failure",
            )));
        }

        let start = match since {
            Some(tag) => {
                let (_, index) = self
                    .tags
                    .iter()
                    .find(|(name, _)| name == tag)
                    .ok_or_else(|| ChangelogError::tag(format!("Cannot resolve tag '{}'", tag)))?;
                index + 1
            }
            None => 0,
        };

        Ok(self.commits[start.min(self.commits.len())..]
            .iter()
            .rev()
            .cloned()
            .collect())
    }
}
