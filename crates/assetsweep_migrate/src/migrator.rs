use anyhow::Result;
use assetsweep_core::is_asset_file;
use log::{debug, info, trace, warn};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    config::Config,
    error::MigrateError,
    types::{Category, CleanupStatus, MigrationSummary},
};

/// Extension of post files copied from each locale directory
const POST_EXTENSION: &str = "mdx";

pub fn run_migration(cfg: &Config) -> Result<MigrationSummary> {
    info!("Migrating {} into {}", cfg.source.display(), cfg.target.display());
    let summary = migrate(cfg)?;
    info!(
        "Migration complete. Copied {}, existing {}, failed {}",
        summary.success_count(),
        summary.existing_count(),
        summary.failure_count()
    );
    Ok(summary)
}

/// Copy posts and images from `cfg.source` into the target layout.
///
/// Only a missing or unlistable source directory is an error; every per-file
/// problem is recorded in the summary and the migration continues.
pub fn migrate(cfg: &Config) -> Result<MigrationSummary, MigrateError> {
    if !cfg.source.is_dir() {
        return Err(MigrateError::MissingSource(cfg.source.clone()));
    }

    let mut summary = MigrationSummary::default();
    let entries = sorted_entries(&cfg.source)?;

    copy_posts(cfg, &entries, &mut summary);
    copy_images(cfg, &entries, &mut summary);

    if cfg.cleanup {
        summary.cleanup = cleanup_source(&cfg.source, &summary);
    }

    Ok(summary)
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>, MigrateError> {
    let list_err = |source| MigrateError::List { path: dir.to_path_buf(), source };
    let mut entries = fs::read_dir(dir)
        .map_err(list_err)?
        .map(|res| res.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(list_err)?;
    entries.sort();
    Ok(entries)
}

fn file_name(path: &Path) -> String {
    path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default()
}

fn copy_posts(cfg: &Config, entries: &[PathBuf], summary: &mut MigrationSummary) {
    let posts_root = cfg.posts_root();

    for locale_dir in entries.iter().filter(|p| p.is_dir()) {
        let locale = file_name(locale_dir);
        if locale.starts_with('.') {
            trace!("Skipping hidden directory: {}", locale_dir.display());
            continue;
        }

        let target_dir = posts_root.join(cfg.locale_dir_name(&locale));
        if !target_dir.is_dir() {
            warn!("Target directory does not exist: {}", target_dir.display());
            summary.add_failure(
                Category::Directories,
                target_dir.display().to_string(),
                "Target directory does not exist",
            );
            continue;
        }

        let posts = match sorted_entries(locale_dir) {
            Ok(posts) => posts,
            Err(e) => {
                let item = locale_dir.display().to_string();
                summary.add_failure(Category::Directories, item, e.to_string());
                continue;
            }
        };

        debug!("Copying posts for locale '{}' into {}", locale, target_dir.display());
        for post in posts.iter().filter(|p| p.extension().is_some_and(|e| e == POST_EXTENSION)) {
            let name = file_name(post);
            let label = format!("{}/{}", locale, name);
            copy_one(post, &target_dir.join(&name), Category::BlogPosts, label, summary);
        }
    }
}

fn copy_images(cfg: &Config, entries: &[PathBuf], summary: &mut MigrationSummary) {
    let images_root = cfg.images_root();
    if !images_root.is_dir() {
        warn!("Images directory does not exist: {}", images_root.display());
        summary.add_failure(
            Category::Directories,
            images_root.display().to_string(),
            "Images directory does not exist",
        );
        return;
    }

    for image in entries.iter().filter(|p| p.is_file() && is_asset_file(p)) {
        let name = file_name(image);
        copy_one(image, &images_root.join(&name), Category::Images, name, summary);
    }
}

fn copy_one(
    source: &Path,
    target: &Path,
    category: Category,
    label: String,
    summary: &mut MigrationSummary,
) {
    if target.exists() {
        trace!("Already exists, skipping: {}", target.display());
        summary.add_existing(category, label);
        return;
    }
    match fs::copy(source, target) {
        Ok(_) => {
            trace!("Copied {} -> {}", source.display(), target.display());
            summary.add_success(category, label);
        }
        Err(e) => {
            warn!("Error copying {}: {}", source.display(), e);
            summary.add_failure(category, label, e.to_string());
        }
    }
}

fn cleanup_source(source: &Path, summary: &MigrationSummary) -> CleanupStatus {
    if summary.has_failures() {
        info!("Skipping cleanup of {} due to migration failures", source.display());
        return CleanupStatus::Skipped;
    }
    match fs::remove_dir_all(source) {
        Ok(()) => {
            info!("Removed source directory {}", source.display());
            CleanupStatus::Removed
        }
        Err(e) => {
            warn!("Failed to clean up {}: {}", source.display(), e);
            CleanupStatus::Failed(e.to_string())
        }
    }
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

    fn config(root: &Path, cleanup: bool) -> Config {
        Config {
            source: root.join("blocks"),
            target: root.join("apps/landing"),
            posts_dir: PathBuf::from("app/blog/_posts"),
            images_dir: PathBuf::from("public/images/blog"),
            default_locale: "en".to_string(),
            cleanup,
        }
    }

    fn target_layout(root: &Path, locales: &[&str]) {
        let landing = root.join("apps/landing");
        fs::create_dir_all(landing.join("public/images/blog")).unwrap();
        for locale in locales {
            fs::create_dir_all(landing.join("app/blog/_posts").join(locale)).unwrap();
        }
    }

    #[test]
    fn test_copies_posts_and_images() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        target_layout(root, &["(en)", "fr"]);
        create_test_file(root, "blocks/en/hello.mdx", "hello");
        create_test_file(root, "blocks/en/draft.txt", "skip");
        create_test_file(root, "blocks/fr/bonjour.mdx", "bonjour");
        create_test_file(root, "blocks/hero.PNG", "png");
        create_test_file(root, "blocks/notes.md", "skip");

        let summary = migrate(&config(root, false)).unwrap();

        assert_eq!(
            summary.successful[&Category::BlogPosts],
            vec!["en/hello.mdx".to_string(), "fr/bonjour.mdx".to_string()]
        );
        assert_eq!(summary.successful[&Category::Images], vec!["hero.PNG".to_string()]);
        assert!(!summary.has_failures());
        assert_eq!(summary.cleanup, CleanupStatus::NotRequested);

        let posts = root.join("apps/landing/app/blog/_posts");
        assert_eq!(fs::read_to_string(posts.join("(en)/hello.mdx")).unwrap(), "hello");
        assert!(posts.join("fr/bonjour.mdx").exists());
        assert!(!posts.join("(en)/draft.txt").exists());
        assert!(root.join("apps/landing/public/images/blog/hero.PNG").exists());
        assert!(root.join("blocks").exists());
    }

    #[test]
    fn test_existing_targets_are_not_overwritten() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        target_layout(root, &["(en)"]);
        create_test_file(root, "blocks/en/hello.mdx", "new");
        create_test_file(root, "apps/landing/app/blog/_posts/(en)/hello.mdx", "old");

        let summary = migrate(&config(root, false)).unwrap();

        assert_eq!(summary.existing[&Category::BlogPosts], vec!["en/hello.mdx".to_string()]);
        assert_eq!(summary.success_count(), 0);
        let kept = root.join("apps/landing/app/blog/_posts/(en)/hello.mdx");
        assert_eq!(fs::read_to_string(kept).unwrap(), "old");
    }

    #[test]
    fn test_missing_locale_dir_is_a_failure() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        target_layout(root, &["(en)"]);
        create_test_file(root, "blocks/en/a.mdx", "");
        create_test_file(root, "blocks/de/b.mdx", "");
        create_test_file(root, "blocks/.cache/c.mdx", "");

        let summary = migrate(&config(root, false)).unwrap();

        let failures = &summary.failed[&Category::Directories];
        assert_eq!(failures.len(), 1);
        assert!(failures[0].item.ends_with("de"));
        assert_eq!(failures[0].reason, "Target directory does not exist");
        assert_eq!(summary.successful[&Category::BlogPosts], vec!["en/a.mdx".to_string()]);
    }

    #[test]
    fn test_missing_images_dir_is_a_failure() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("apps/landing/app/blog/_posts/(en)")).unwrap();
        create_test_file(root, "blocks/hero.png", "");

        let summary = migrate(&config(root, false)).unwrap();

        let failures = &summary.failed[&Category::Directories];
        assert_eq!(failures[0].reason, "Images directory does not exist");
        assert!(!summary.successful.contains_key(&Category::Images));
    }

    #[test]
    fn test_cleanup_removes_source_after_clean_run() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        target_layout(root, &["(en)"]);
        create_test_file(root, "blocks/en/a.mdx", "");
        create_test_file(root, "blocks/logo.svg", "");

        let summary = migrate(&config(root, true)).unwrap();

        assert_eq!(summary.cleanup, CleanupStatus::Removed);
        assert!(!root.join("blocks").exists());
        assert!(root.join("apps/landing/public/images/blog/logo.svg").exists());
    }

    #[test]
    fn test_cleanup_skipped_after_failure() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        target_layout(root, &["(en)"]);
        create_test_file(root, "blocks/ja/a.mdx", "");

        let summary = migrate(&config(root, true)).unwrap();

        assert_eq!(summary.cleanup, CleanupStatus::Skipped);
        assert!(root.join("blocks/ja/a.mdx").exists());
    }

    #[test]
    fn test_missing_source() {
        let temp_dir = TempDir::new().unwrap();

        let err = migrate(&config(temp_dir.path(), false)).unwrap_err();
        assert!(matches!(err, MigrateError::MissingSource(_)));
    }
}
