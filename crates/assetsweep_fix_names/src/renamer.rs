use anyhow::Result;
use assetsweep_core::{all_files, relative_slash_path};
use log::{debug, info, trace, warn};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    config::Config,
    error::FixNamesError,
    types::{FixOutcome, Rename, RenameFailure},
};

pub fn run_fix_names(cfg: &Config) -> Result<FixOutcome> {
    info!("Starting filename correction under {}", cfg.root.display());
    let outcome = fix_names(&cfg.root, &cfg.from_suffix, &cfg.to_suffix, cfg.dry_run)?;
    info!(
        "Filename correction complete. Renamed {}, conflicts {}, failures {}",
        outcome.renamed.len(),
        outcome.conflicts.len(),
        outcome.failures.len()
    );
    Ok(outcome)
}

/// Rename every file under `root` whose name ends in `from_suffix` so that it
/// ends in `to_suffix` instead.
///
/// The tree is listed before anything is renamed. A file whose corrected name
/// already exists is recorded as a conflict and left in place. A file whose
/// corrected name would still end in `from_suffix` is recorded as a failure
/// and not renamed, so a second run changes nothing.
pub fn fix_names(
    root: &Path,
    from_suffix: &str,
    to_suffix: &str,
    dry_run: bool,
) -> Result<FixOutcome, FixNamesError> {
    if !root.is_dir() {
        return Err(FixNamesError::MissingRoot(root.to_path_buf()));
    }
    if from_suffix.is_empty() || to_suffix.ends_with(from_suffix) {
        return Err(FixNamesError::InvalidSuffix {
            from: from_suffix.to_string(),
            to: to_suffix.to_string(),
        });
    }

    let files: Vec<PathBuf> = all_files(root).collect();
    debug!("Checking {} files for suffix '{}'", files.len(), from_suffix);

    let mut outcome = FixOutcome { dry_run, ..Default::default() };
    for path in files {
        outcome.files_checked += 1;
        let Some(stem) =
            path.file_name().and_then(|n| n.to_str()).and_then(|n| n.strip_suffix(from_suffix))
        else {
            continue;
        };

        let corrected = format!("{}{}", stem, to_suffix);
        let target = path.with_file_name(&corrected);
        let rename = Rename { from: display(root, &path), to: display(root, &target) };

        // A name that would match again is left alone so repeated runs stay a no-op.
        if corrected.ends_with(from_suffix) {
            warn!("Not renaming {}: {} still ends with '{}'", rename.from, rename.to, from_suffix);
            outcome.failures.push(RenameFailure {
                file: rename.from,
                reason: format!("corrected name {} still ends with '{}'", rename.to, from_suffix),
            });
            continue;
        }

        if target.exists() {
            warn!("Not renaming {}: {} already exists", rename.from, rename.to);
            outcome.conflicts.push(rename);
            continue;
        }

        if dry_run {
            trace!("Would rename {} -> {}", rename.from, rename.to);
            outcome.renamed.push(rename);
            continue;
        }

        match fs::rename(&path, &target) {
            Ok(()) => {
                debug!("Renamed {} -> {}", rename.from, rename.to);
                outcome.renamed.push(rename);
            }
            Err(e) => {
                warn!("Error renaming {}: {}", rename.from, e);
                outcome.failures.push(RenameFailure { file: rename.from, reason: e.to_string() });
            }
        }
    }

    Ok(outcome)
}

fn display(root: &Path, path: &Path) -> String {
    relative_slash_path(root, path).unwrap_or_else(|| path.to_string_lossy().into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_file(dir: &Path, path: &str, content: &str) -> PathBuf {
        let file_path = dir.join(path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    #[test]
    fn test_renames_doubled_extension() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        create_test_file(root, "(en)/hello.mdx.md", "# Hello");
        create_test_file(root, "fr/bonjour.mdx.md", "# Bonjour");
        create_test_file(root, "(en)/keep.mdx", "# Keep");
        create_test_file(root, "notes.md", "notes");

        let outcome = fix_names(root, ".mdx.md", ".mdx", false).unwrap();

        assert_eq!(outcome.files_checked, 4);
        assert_eq!(
            outcome.renamed,
            vec![
                Rename { from: "(en)/hello.mdx.md".into(), to: "(en)/hello.mdx".into() },
                Rename { from: "fr/bonjour.mdx.md".into(), to: "fr/bonjour.mdx".into() },
            ]
        );
        assert_eq!(fs::read_to_string(root.join("(en)/hello.mdx")).unwrap(), "# Hello");
        assert!(!root.join("(en)/hello.mdx.md").exists());
        assert!(root.join("notes.md").exists());
    }

    #[test]
    fn test_second_run_is_a_no_op() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        create_test_file(root, "post.mdx.md", "");

        let first = fix_names(root, ".mdx.md", ".mdx", false).unwrap();
        let second = fix_names(root, ".mdx.md", ".mdx", false).unwrap();

        assert_eq!(first.renamed.len(), 1);
        assert!(second.renamed.is_empty());
        assert!(second.conflicts.is_empty());
        assert!(root.join("post.mdx").exists());
    }

    #[test]
    fn test_existing_target_is_a_conflict() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        create_test_file(root, "post.mdx.md", "new");
        create_test_file(root, "post.mdx", "old");

        let outcome = fix_names(root, ".mdx.md", ".mdx", false).unwrap();

        assert!(outcome.renamed.is_empty());
        assert_eq!(outcome.conflicts.len(), 1);
        assert_eq!(fs::read_to_string(root.join("post.mdx")).unwrap(), "old");
        assert!(root.join("post.mdx.md").exists());
    }

    #[test]
    fn test_dry_run_leaves_files_in_place() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        create_test_file(root, "post.mdx.md", "");

        let outcome = fix_names(root, ".mdx.md", ".mdx", true).unwrap();

        assert!(outcome.dry_run);
        assert_eq!(outcome.renamed.len(), 1);
        assert!(root.join("post.mdx.md").exists());
        assert!(!root.join("post.mdx").exists());
    }

    #[test]
    fn test_only_trailing_suffix_is_replaced() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        create_test_file(root, "a.mdx.md.mdx.md", "");

        let outcome = fix_names(root, ".mdx.md", ".mdx", false).unwrap();

        assert_eq!(outcome.renamed[0].to, "a.mdx.md.mdx");
        assert!(root.join("a.mdx.md.mdx").exists());
    }

    #[test]
    fn test_name_that_would_match_again_is_not_renamed() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        create_test_file(root, "baa", "");
        create_test_file(root, "banana", "");

        let first = fix_names(root, "a", "", false).unwrap();

        assert_eq!(first.renamed, vec![Rename { from: "banana".into(), to: "banan".into() }]);
        assert_eq!(first.failures.len(), 1);
        assert_eq!(first.failures[0].file, "baa");
        assert!(root.join("baa").exists());
        assert!(!root.join("ba").exists());

        let second = fix_names(root, "a", "", false).unwrap();
        assert!(second.renamed.is_empty());
        assert!(root.join("banan").exists());
    }

    #[test]
    fn test_missing_root() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("_posts");

        let err = fix_names(&missing, ".mdx.md", ".mdx", false).unwrap_err();
        assert!(matches!(err, FixNamesError::MissingRoot(_)));
    }

    #[test]
    fn test_rejects_suffix_that_would_match_again() {
        let temp_dir = TempDir::new().unwrap();

        assert!(matches!(
            fix_names(temp_dir.path(), ".md", ".mdx.md", false),
            Err(FixNamesError::InvalidSuffix { .. })
        ));
        assert!(matches!(
            fix_names(temp_dir.path(), "", ".mdx", false),
            Err(FixNamesError::InvalidSuffix { .. })
        ));
    }
}
