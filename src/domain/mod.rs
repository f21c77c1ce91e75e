//! Domain logic - pure business rules independent of git operations

pub mod category;
pub mod tag;

pub use category::{Category, ChangeSet};
pub use tag::{sort_newest_first, version_cmp, Tag};
