use std::collections::BTreeMap;
use std::fmt;

/// Changelog bucket a commit is filed under.
///
/// Variant order is the order subsections appear in a rendered section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    BreakingChanges,
    Added,
    Changed,
    Fixed,
}

impl Category {
    /// Every bucket, in rendering order.
    pub const ALL: [Category; 4] = [
        Category::BreakingChanges,
        Category::Added,
        Category::Changed,
        Category::Fixed,
    ];

    /// Subsection heading used in the changelog.
    pub fn heading(&self) -> &'static str {
        match self {
            Category::BreakingChanges => "Breaking Changes",
            Category::Added => "Added",
            Category::Changed => "Changed",
            Category::Fixed => "Fixed",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.heading())
    }
}

/// Categorized changelog entries, keyed by bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    entries: BTreeMap<Category, Vec<String>>,
}

impl ChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to a bucket, keeping insertion order.
    pub fn push(&mut self, category: Category, entry: impl Into<String>) {
        self.entries.entry(category).or_default().push(entry.into());
    }

    /// Entries of one bucket; empty when nothing was filed there.
    pub fn entries(&self, category: Category) -> &[String] {
        self.entries
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Non-empty buckets in rendering order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> + '_ {
        Category::ALL
            .into_iter()
            .map(|category| (category, self.entries(category)))
            .filter(|(_, entries)| !entries.is_empty())
    }

    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iter_follows_bucket_order() {
        let mut changes = ChangeSet::new();
        changes.push(Category::Fixed, "bug Y");
        changes.push(Category::Added, "add X");
        changes.push(Category::BreakingChanges, "drop API");

        let order: Vec<Category> = changes.iter().map(|(c, _)| c).collect();
        assert_eq!(
            order,
            vec![Category::BreakingChanges, Category::Added, Category::Fixed]
        );
    }

    #[test]
    fn test_entries_keep_insertion_order() {
        let mut changes = ChangeSet::new();
        changes.push(Category::Changed, "second");
        changes.push(Category::Changed, "first");
        assert_eq!(changes.entries(Category::Changed), ["second", "first"]);
        assert!(changes.entries(Category::Added).is_empty());
        assert_eq!(changes.len(), 2);
    }

    #[test]
    fn test_headings() {
        assert_eq!(Category::BreakingChanges.to_string(), "Breaking Changes");
        assert_eq!(Category::Fixed.heading(), "Fixed");
        assert!(ChangeSet::new().is_empty());
    }
}
