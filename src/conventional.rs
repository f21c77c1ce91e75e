use regex::Regex;

use crate::config::CommitsConfig;
use crate::domain::{Category, ChangeSet};

/// Files commit subjects into changelog buckets.
///
/// Matching is substring-based on the lowercased subject, in this order:
/// release noise, breaking markers, added keywords, fixed keywords,
/// falling back to [`Category::Changed`].
#[derive(Debug)]
pub struct Classifier {
    config: CommitsConfig,
    type_prefix: Regex,
    breaking_prefix: Regex,
}

fn lowercase_all(needles: Vec<String>) -> Vec<String> {
    needles.into_iter().map(|n| n.to_lowercase()).collect()
}

impl Classifier {
    /// Builds a classifier; keywords are lowercased so configured casing
    /// does not matter.
    pub fn new(config: CommitsConfig) -> Self {
        let config = CommitsConfig {
            release_marker: config.release_marker.to_lowercase(),
            release_phrases: lowercase_all(config.release_phrases),
            breaking_markers: lowercase_all(config.breaking_markers),
            added_keywords: lowercase_all(config.added_keywords),
            fixed_keywords: lowercase_all(config.fixed_keywords),
        };

        Classifier {
            config,
            type_prefix: Regex::new(r"^(feat|fix|chore|docs|style|refactor|perf|test)(\(.*\))?!?:")
                .expect("static regex"),
            breaking_prefix: Regex::new(r"(?i)^breaking change:\s*").expect("static regex"),
        }
    }

    /// Returns the bucket for a commit subject, or `None` for release noise.
    pub fn categorize(&self, subject: &str) -> Option<Category> {
        let lower = subject.to_lowercase();
        let contains_any = |needles: &[String]| needles.iter().any(|n| lower.contains(n.as_str()));

        if self.is_release_commit(&lower) {
            return None;
        }

        if contains_any(&self.config.breaking_markers) {
            Some(Category::BreakingChanges)
        } else if contains_any(&self.config.added_keywords) {
            Some(Category::Added)
        } else if contains_any(&self.config.fixed_keywords) {
            Some(Category::Fixed)
        } else {
            Some(Category::Changed)
        }
    }

    fn is_release_commit(&self, lower: &str) -> bool {
        lower.contains(self.config.release_marker.as_str())
            && self
                .config
                .release_phrases
                .iter()
                .any(|phrase| lower.contains(phrase.as_str()))
    }

    /// Strips the conventional-commit type prefix and any leading
    /// "breaking change:" label from a subject.
    pub fn display_text(&self, subject: &str) -> String {
        let without_type = self.type_prefix.replace(subject, "");
        let without_type = without_type.trim();
        self.breaking_prefix
            .replace(without_type, "")
            .trim()
            .to_string()
    }

    /// Classifies every subject, dropping release noise and empty lines.
    pub fn classify_all<S: AsRef<str>>(&self, subjects: &[S]) -> ChangeSet {
        let mut changes = ChangeSet::new();

        for subject in subjects {
            let subject = subject.as_ref();
            if subject.is_empty() {
                continue;
            }
            match self.categorize(subject) {
                Some(category) => changes.push(category, self.display_text(subject)),
                None => tracing::debug!(subject, "skipping release commit"),
            }
        }

        changes
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Classifier::new(CommitsConfig::default())
    }
}
