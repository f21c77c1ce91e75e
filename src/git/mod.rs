//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the two history
//! queries the changelog update needs, allowing for a real `git2`-backed
//! implementation and a mock implementation for testing.
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: An in-memory implementation for testing
//!
//! ```rust
//! # use update_changelog::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
//! let tags = repo.list_tags()?;
//! let subjects = repo.commit_subjects(tags.first().map(String::as_str))?;
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Read-only history queries used to build a changelog section
pub trait Repository {
    /// Get all tag names in the repository
    ///
    /// No particular order is guaranteed; callers sort with
    /// [crate::domain::version_cmp].
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Tag names, empty when the repository has no tags
    /// * `Err` - If the tag list cannot be read
    fn list_tags(&self) -> Result<Vec<String>>;

    /// Get commit subject lines reachable from HEAD
    ///
    /// Mirrors `git log --pretty=format:%s [<since>..HEAD]`: subjects are
    /// returned newest first, and when `since` is given, commits reachable
    /// from that tag are excluded.
    ///
    /// # Arguments
    /// * `since` - Optional tag name bounding the range
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Subject lines, newest first
    /// * `Err` - If HEAD or the tag cannot be resolved, or the walk fails
    fn commit_subjects(&self, since: Option<&str>) -> Result<Vec<String>>;
}
