//! Rendering of version sections and in-place patching of the changelog.
//!
//! A changelog is a `# Changelog` title followed by version sections,
//! newest first. Each section starts with a `## [VERSION] - YYYY-MM-DD`
//! header and runs until the next header or the end of the document.

use regex::Regex;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::domain::ChangeSet;
use crate::error::{ChangelogError, Result};

/// Title line every changelog starts with.
pub const TITLE: &str = "# Changelog";

/// Matches any version header.
const ANY_HEADER: &str = r"(?m)^## \[.*?\] - \d{4}-\d{2}-\d{2}";

/// How the changelog document was changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangelogUpdate {
    /// No changelog existed; a new document was created
    Created,
    /// The version was new; its section was inserted below the title
    Inserted,
    /// The version was already present; its section was replaced
    Replaced,
}

/// Renders one version section.
///
/// Only non-empty buckets get a subsection. The result always ends with a
/// blank line so that sections stack without further separators.
pub fn render_section(version: &str, date: &str, changes: &ChangeSet) -> String {
    let mut section = String::new();
    let _ = writeln!(section, "## [{}] - {}", version, date);

    for (category, entries) in changes.iter() {
        let _ = writeln!(section, "### {}", category);
        for entry in entries {
            let _ = writeln!(section, "- {}", entry);
        }
        section.push('\n');
    }

    if changes.is_empty() {
        section.push('\n');
    }

    section
}

fn version_header(version: &str) -> Result<Regex> {
    let pattern = format!(
        r"(?m)^## \[{}\] - \d{{4}}-\d{{2}}-\d{{2}}",
        regex::escape(version)
    );
    Regex::new(&pattern).map_err(|e| ChangelogError::changelog(e.to_string()))
}

/// Byte offset just past the title line and any blank lines after it.
fn find_insertion_point(content: &str) -> Option<usize> {
    let mut offset = 0;
    let mut found = false;
    let mut lines = content.split_inclusive('\n');

    for line in lines.by_ref() {
        offset += line.len();
        if line.trim_end() == TITLE {
            found = true;
            break;
        }
    }
    if !found {
        return None;
    }

    for line in lines {
        if !line.trim().is_empty() {
            break;
        }
        offset += line.len();
    }
    Some(offset)
}

/// Computes the patched document without touching the filesystem.
///
/// # Arguments
/// * `existing` - Current changelog content, `None` if there is no file
/// * `version` - Version whose section is being written
/// * `section` - Output of [render_section]
///
/// # Returns
/// The new document content and which patching rule applied.
pub fn patch_document(
    existing: Option<&str>,
    version: &str,
    section: &str,
) -> Result<(String, ChangelogUpdate)> {
    let content = match existing {
        Some(content) => content,
        None => {
            return Ok((format!("{}\n\n{}", TITLE, section), ChangelogUpdate::Created));
        }
    };

    let any_header =
        Regex::new(ANY_HEADER).map_err(|e| ChangelogError::changelog(e.to_string()))?;

    if let Some(header) = version_header(version)?.find(content) {
        let next_header = any_header
            .find_at(content, header.end())
            .map(|m| m.start())
            .unwrap_or(content.len());
        tracing::debug!(
            start = header.start(),
            end = next_header,
            "replacing existing section"
        );

        let mut updated = String::with_capacity(content.len() + section.len());
        updated.push_str(&content[..header.start()]);
        updated.push_str(section);
        updated.push_str(&content[next_header..]);
        return Ok((updated, ChangelogUpdate::Replaced));
    }

    // Text between the title and the first header stays above every section
    let updated = match find_insertion_point(content) {
        Some(offset) => match any_header.find_at(content, offset) {
            Some(first) if first.start() == offset => {
                let head = content[..offset].trim_end();
                format!("{}\n\n{}{}", head, section, &content[offset..])
            }
            Some(first) => format!(
                "{}{}{}",
                &content[..first.start()],
                section,
                &content[first.start()..]
            ),
            None => format!("{}\n\n{}", content.trim_end(), section),
        },
        None => format!("{}\n\n{}{}", TITLE, section, content),
    };
    Ok((updated, ChangelogUpdate::Inserted))
}

/// Whether `content` carries the title line.
pub fn has_title(content: &str) -> bool {
    content.lines().any(|line| line.trim_end() == TITLE)
}

/// Reads the changelog if it exists.
pub fn read_existing(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}
