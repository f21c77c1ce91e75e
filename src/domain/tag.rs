use std::cmp::Ordering;

/// Represents a git tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
}

impl Tag {
    /// Create a new tag from a string
    pub fn new(name: impl Into<String>) -> Self {
        Tag { name: name.into() }
    }

    /// A tag is stable unless its name contains one of `markers`, ignoring case.
    pub fn is_stable(&self, markers: &[String]) -> bool {
        let lower = self.name.to_lowercase();
        !markers
            .iter()
            .any(|marker| lower.contains(&marker.to_lowercase()))
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Splits a tag name into alternating runs of ASCII digits and everything else.
fn runs(name: &str) -> Vec<&str> {
    let mut runs = Vec::new();
    let mut start = 0;
    let mut in_digits = None;

    for (idx, ch) in name.char_indices() {
        let is_digit = ch.is_ascii_digit();
        match in_digits {
            Some(prev) if prev != is_digit => {
                runs.push(&name[start..idx]);
                start = idx;
            }
            _ => {}
        }
        in_digits = Some(is_digit);
    }
    if start < name.len() {
        runs.push(&name[start..]);
    }
    runs
}

fn compare_numeric(a: &str, b: &str) -> Ordering {
    let a_trimmed = a.trim_start_matches('0');
    let b_trimmed = b.trim_start_matches('0');
    a_trimmed
        .len()
        .cmp(&b_trimmed.len())
        .then_with(|| a_trimmed.cmp(b_trimmed))
}

/// Orders tag names the way `git tag --sort=version:refname` does.
///
/// Digit runs compare by numeric value, other runs compare bytewise, and a
/// name that is a prefix of another sorts first (`v1.0.0` < `v1.0.0-beta1`).
pub fn version_cmp(a: &str, b: &str) -> Ordering {
    let a_runs = runs(a);
    let b_runs = runs(b);

    for (left, right) in a_runs.iter().zip(b_runs.iter()) {
        let left_numeric = left.starts_with(|c: char| c.is_ascii_digit());
        let right_numeric = right.starts_with(|c: char| c.is_ascii_digit());

        let ord = if left_numeric && right_numeric {
            compare_numeric(left, right)
        } else {
            left.as_bytes().cmp(right.as_bytes())
        };

        if ord != Ordering::Equal {
            return ord;
        }
    }

    a_runs.len().cmp(&b_runs.len())
}

/// Sorts tags newest first by version order.
pub fn sort_newest_first(tags: &mut [Tag]) {
    tags.sort_by(|a, b| version_cmp(&b.name, &a.name));
}
