//! Main workflow orchestration logic
//!
//! Runs the full update: read the project version, resolve the last stable
//! tag, classify the commits since it, and patch the changelog. Kept apart
//! from `main.rs` so it can be driven programmatically and in tests.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::boundary::BoundaryWarning;
use crate::changelog::{self, ChangelogUpdate};
use crate::config::Config;
use crate::conventional::Classifier;
use crate::git::Repository;
use crate::history;
use crate::ui;
use crate::version;

/// Arguments for the update workflow
///
/// Decoupled from the clap `Args` so the workflow can be called without a
/// command line.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateWorkflowArgs {
    /// Directory the configured file paths are resolved against
    pub project_root: PathBuf,

    /// Date stamped into the section header, `YYYY-MM-DD`
    pub date: String,

    /// Render and report without writing the changelog
    pub dry_run: bool,
}

/// Result of a successful update workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// Version label used in the section header (empty if none was found)
    pub version: String,

    /// Which patching rule applied (or would apply, on a dry run)
    pub update: ChangelogUpdate,

    /// Changelog the section was written to
    pub changelog_path: PathBuf,

    /// The rendered section
    pub section: String,

    /// Whether the changelog was actually rewritten
    pub written: bool,
}

/// Today's local date in the section header format.
pub fn current_date() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// Main update workflow
///
/// # Returns
///
/// The applied update, or an error if the version file, tag list, commit
/// log, or changelog could not be read or written. On error the changelog
/// is left untouched.
pub fn run_update_workflow<R: Repository>(
    repo: &R,
    config: &Config,
    args: &UpdateWorkflowArgs,
) -> Result<WorkflowResult> {
    ui::display_status("Starting changelog update...");

    let version_path = config.version_path(&args.project_root);
    let version = version::read_version(&version_path)
        .with_context(|| format!("Failed to read version from {}", version_path.display()))?;
    let version = match version {
        Some(version) => version,
        None => {
            ui::display_boundary_warning(&BoundaryWarning::VersionNotFound {
                path: version_path.display().to_string(),
            });
            String::new()
        }
    };
    ui::display_status(&format!("Current version: {}", version));

    let selection = history::resolve_last_tag(repo, &config.tags.prerelease_markers)
        .context("Failed to list git tags")?;
    match (&selection.tag, &selection.warning) {
        (_, Some(warning)) => ui::display_boundary_warning(warning),
        (Some(tag), None) => {
            ui::display_status(&format!("Using last stable tag for changelog: {}", tag))
        }
        (None, None) => {}
    }

    let classifier = Classifier::new(config.commits.clone());
    let changes = history::collect_changes(repo, selection.tag.as_ref(), &classifier)
        .context("Failed to get git commits")?;
    ui::display_change_summary(&changes);

    let section = changelog::render_section(&version, &args.date, &changes);

    let changelog_path = config.changelog_path(&args.project_root);
    let existing = changelog::read_existing(&changelog_path)
        .with_context(|| format!("Failed to read {}", changelog_path.display()))?;
    if let Some(content) = existing.as_deref() {
        if !changelog::has_title(content) {
            ui::display_boundary_warning(&BoundaryWarning::MissingTitle {
                path: changelog_path.display().to_string(),
            });
        }
    }

    let (updated, update) = changelog::patch_document(existing.as_deref(), &version, &section)?;

    if args.dry_run {
        ui::display_section_preview(&section);
        ui::display_status(&format!(
            "Dry run: {} would be {}",
            changelog_path.display(),
            describe(update)
        ));
        return Ok(WorkflowResult {
            version,
            update,
            changelog_path,
            section,
            written: false,
        });
    }

    fs::write(&changelog_path, updated)
        .with_context(|| format!("Failed to write {}", changelog_path.display()))?;

    match update {
        ChangelogUpdate::Created => ui::display_success(&format!(
            "Created new changelog file with version {}",
            version
        )),
        ChangelogUpdate::Inserted => {
            ui::display_success(&format!("Added new version {} to changelog", version))
        }
        ChangelogUpdate::Replaced => {
            ui::display_success(&format!("Updated entries for version {}", version))
        }
    }

    Ok(WorkflowResult {
        version,
        update,
        changelog_path,
        section,
        written: true,
    })
}

fn describe(update: ChangelogUpdate) -> &'static str {
    match update {
        ChangelogUpdate::Created => "created",
        ChangelogUpdate::Inserted => "given a new section",
        ChangelogUpdate::Replaced => "updated in place",
    }
}
