//! Tag resolution and commit harvesting on top of [crate::git::Repository].

use crate::boundary::BoundaryWarning;
use crate::conventional::Classifier;
use crate::domain::{sort_newest_first, ChangeSet, Tag};
use crate::error::Result;
use crate::git::Repository;

/// Outcome of picking the tag that bounds the changelog range.
#[derive(Debug, Clone, PartialEq)]
pub struct TagSelection {
    pub tag: Option<Tag>,
    pub warning: Option<BoundaryWarning>,
}

/// Picks the newest stable tag by version order.
///
/// Falls back to the newest tag overall when every tag is a prerelease,
/// and to no tag at all when the repository has none.
pub fn select_last_tag(tag_names: Vec<String>, prerelease_markers: &[String]) -> TagSelection {
    let mut tags: Vec<Tag> = tag_names
        .into_iter()
        .filter(|name| !name.is_empty())
        .map(Tag::new)
        .collect();
    sort_newest_first(&mut tags);

    if let Some(stable) = tags.iter().find(|tag| tag.is_stable(prerelease_markers)) {
        return TagSelection {
            tag: Some(stable.clone()),
            warning: None,
        };
    }

    match tags.into_iter().next() {
        Some(newest) => TagSelection {
            warning: Some(BoundaryWarning::NoStableTags {
                newest: newest.name.clone(),
            }),
            tag: Some(newest),
        },
        None => TagSelection {
            tag: None,
            warning: Some(BoundaryWarning::NoTags),
        },
    }
}

/// Lists the repository's tags and resolves the last stable one.
///
/// # Returns
/// * `Ok(TagSelection)` - The chosen tag, if any
/// * `Err` - If the tag list cannot be read
pub fn resolve_last_tag<R: Repository>(
    repo: &R,
    prerelease_markers: &[String],
) -> Result<TagSelection> {
    let names = repo.list_tags()?;
    tracing::debug!(count = names.len(), "listed tags");
    Ok(select_last_tag(names, prerelease_markers))
}

/// Classifies every commit subject after `since` (or the full history).
///
/// # Returns
/// * `Ok(ChangeSet)` - Categorized entries, release noise removed
/// * `Err` - If the commit log cannot be read
pub fn collect_changes<R: Repository>(
    repo: &R,
    since: Option<&Tag>,
    classifier: &Classifier,
) -> Result<ChangeSet> {
    let subjects = repo.commit_subjects(since.map(|tag| tag.name.as_str()))?;
    tracing::debug!(count = subjects.len(), since = ?since.map(|t| &t.name), "harvested commits");
    Ok(classifier.classify_all(&subjects))
}
