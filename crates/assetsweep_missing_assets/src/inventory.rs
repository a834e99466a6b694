use assetsweep_core::{asset_files, is_asset_file, relative_slash_path};
use log::{debug, trace};
use std::{collections::HashSet, path::Path};

use crate::error::AuditError;

/// Asset paths that exist on disk, relative to the asset root.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    assets: HashSet<String>,
}

impl Inventory {
    pub fn contains(&self, asset: &str) -> bool {
        self.assets.contains(asset)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl FromIterator<String> for Inventory {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self { assets: iter.into_iter().collect() }
    }
}

/// Collect every image file under `asset_root`.
///
/// A missing asset root is an error rather than an empty inventory, so a
/// misconfigured path is not mistaken for a tree without images.
pub fn build_inventory(asset_root: &Path) -> Result<Inventory, AuditError> {
    if !asset_root.is_dir() {
        debug!("Asset root not found: {}", asset_root.display());
        return Err(AuditError::MissingAssetRoot(asset_root.to_path_buf()));
    }

    let inventory: Inventory = asset_files(asset_root)
        .filter(|p| is_asset_file(p))
        .filter_map(|p| relative_slash_path(asset_root, &p))
        .inspect(|rel| trace!("Found asset: {}", rel))
        .collect();

    debug!("Collected {} assets under {}", inventory.len(), asset_root.display());
    Ok(inventory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{fs, path::PathBuf};
    use tempfile::TempDir;

    fn create_test_file(dir: &Path, path: &str) -> PathBuf {
        let file_path = dir.join(path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&file_path, b"").expect("Failed to write test file");
        file_path
    }

    #[test]
    fn test_build_inventory_collects_images_only() {
        let temp_dir = TempDir::new().unwrap();
        let asset_root = temp_dir.path().join("public");

        create_test_file(&asset_root, "images/hero.png");
        create_test_file(&asset_root, "images/blog/Cover.JPG");
        create_test_file(&asset_root, "favicon.ico");
        create_test_file(&asset_root, "robots.txt");

        let inventory = build_inventory(&asset_root).unwrap();

        assert_eq!(inventory.len(), 2);
        assert!(inventory.contains("images/hero.png"));
        assert!(inventory.contains("images/blog/Cover.JPG"));
        assert!(!inventory.contains("images/blog/cover.jpg"));
        assert!(!inventory.contains("favicon.ico"));
    }

    #[test]
    fn test_build_inventory_empty_dir() {
        let temp_dir = TempDir::new().unwrap();
        let inventory = build_inventory(temp_dir.path()).unwrap();
        assert!(inventory.is_empty());
    }

    #[test]
    fn test_build_inventory_missing_root() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("public");

        let err = build_inventory(&missing).unwrap_err();
        assert!(matches!(err, AuditError::MissingAssetRoot(ref p) if p == &missing));
    }

    #[test]
    fn test_build_inventory_root_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = create_test_file(temp_dir.path(), "public");

        assert!(matches!(build_inventory(&file), Err(AuditError::MissingAssetRoot(_))));
    }
}
