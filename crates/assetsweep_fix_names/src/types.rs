#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rename {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameFailure {
    pub file: String,
    pub reason: String,
}

/// Result of one pass over the tree. Paths are relative to the root.
#[derive(Debug, Clone, Default)]
pub struct FixOutcome {
    pub renamed: Vec<Rename>,
    /// Files left alone because the corrected name is already taken
    pub conflicts: Vec<Rename>,
    pub failures: Vec<RenameFailure>,
    pub files_checked: usize,
    pub dry_run: bool,
}
