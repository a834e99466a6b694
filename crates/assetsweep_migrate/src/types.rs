use indexmap::IndexMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Directories,
    BlogPosts,
    Images,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Directories => "Directories",
            Category::BlogPosts => "Blog Posts",
            Category::Images => "Images",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub item: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CleanupStatus {
    #[default]
    NotRequested,
    /// Requested, but at least one failure was recorded
    Skipped,
    Removed,
    Failed(String),
}

/// Per-category outcome of a migration, in the order items were processed.
#[derive(Debug, Clone, Default)]
pub struct MigrationSummary {
    pub successful: IndexMap<Category, Vec<String>>,
    pub existing: IndexMap<Category, Vec<String>>,
    pub failed: IndexMap<Category, Vec<Failure>>,
    pub cleanup: CleanupStatus,
}

impl MigrationSummary {
    pub fn add_success(&mut self, category: Category, item: impl Into<String>) {
        self.successful.entry(category).or_default().push(item.into());
    }

    pub fn add_existing(&mut self, category: Category, item: impl Into<String>) {
        self.existing.entry(category).or_default().push(item.into());
    }

    pub fn add_failure(
        &mut self,
        category: Category,
        item: impl Into<String>,
        reason: impl Into<String>,
    ) {
        self.failed
            .entry(category)
            .or_default()
            .push(Failure { item: item.into(), reason: reason.into() });
    }

    pub fn has_failures(&self) -> bool {
        self.failed.values().any(|f| !f.is_empty())
    }

    pub fn success_count(&self) -> usize {
        self.successful.values().map(Vec::len).sum()
    }

    pub fn existing_count(&self) -> usize {
        self.existing.values().map(Vec::len).sum()
    }

    pub fn failure_count(&self) -> usize {
        self.failed.values().map(Vec::len).sum()
    }
}
