use std::fmt;

/// Non-fatal conditions met while collecting history or patching the
/// changelog. These are reported to the user and the update continues.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Version file has no `version = "..."` assignment
    VersionNotFound { path: String },
    /// Only prerelease tags exist; the newest one bounds the range
    NoStableTags { newest: String },
    /// Repository has no tags; the whole history is used
    NoTags,
    /// Changelog exists but has no title line; one is prepended
    MissingTitle { path: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::VersionNotFound { path } => {
                write!(f, "No version found in '{}'", path)
            }
            BoundaryWarning::NoStableTags { newest } => {
                write!(f, "No stable tags found, using newest tag '{}'", newest)
            }
            BoundaryWarning::NoTags => {
                write!(f, "No tags found, using the complete commit history")
            }
            BoundaryWarning::MissingTitle { path } => {
                write!(f, "'{}' has no '# Changelog' title line", path)
            }
        }
    }
}
