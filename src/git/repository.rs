use crate::error::{ChangelogError, Result};
use git2::{Repository as Git2Repo, Sort};
use std::path::{Path, PathBuf};

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Root of the working tree, `None` for bare repositories
    pub fn workdir(&self) -> Option<PathBuf> {
        self.repo.workdir().map(Path::to_path_buf)
    }
}

/// Subject line as `git log --pretty=format:%s` prints it; invalid UTF-8 is
/// replaced rather than dropped.
fn subject_text(summary: Option<&[u8]>) -> String {
    summary
        .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
        .unwrap_or_default()
}

impl super::Repository for Git2Repository {
    fn list_tags(&self) -> Result<Vec<String>> {
        let tags = self.repo.tag_names(None)?;

        Ok(tags.iter().flatten().map(|name| name.to_string()).collect())
    }

    fn commit_subjects(&self, since: Option<&str>) -> Result<Vec<String>> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push_head()?;

        if let Some(tag_name) = since {
            // Annotated tags peel through the tag object to the commit
            let tag_commit = self
                .repo
                .revparse_single(&format!("refs/tags/{}", tag_name))
                .and_then(|object| object.peel_to_commit())
                .map_err(|e| {
                    ChangelogError::tag(format!("Cannot resolve tag '{}': {}", tag_name, e))
                })?;
            revwalk.hide(tag_commit.id())?;
        }

        let mut subjects = Vec::new();

        for oid_result in revwalk {
            let oid = oid_result?;
            let commit = self.repo.find_commit(oid)?;
            subjects.push(subject_text(commit.summary_bytes()));
        }

        Ok(subjects)
    }
}
