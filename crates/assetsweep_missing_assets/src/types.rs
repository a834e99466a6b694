use indexmap::IndexMap;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnreadableFile {
    /// Root-relative path of the file that could not be scanned
    pub file: String,
    pub reason: String,
}

/// Referenced assets that do not exist, each with the files referencing it.
///
/// Serializes as `{"missing_images": {"<asset>": ["<file>", ...]}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MissingAssetReport {
    missing_images: IndexMap<String, Vec<String>>,
}

impl MissingAssetReport {
    pub(crate) fn insert(&mut self, asset: String, files: Vec<String>) {
        self.missing_images.insert(asset, files);
    }

    pub fn get(&self, asset: &str) -> Option<&[String]> {
        self.missing_images.get(asset).map(Vec::as_slice)
    }

    pub fn contains(&self, asset: &str) -> bool {
        self.missing_images.contains_key(asset)
    }

    pub fn len(&self) -> usize {
        self.missing_images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.missing_images.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.missing_images.iter()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditDiagnostics {
    pub unreadable: Vec<UnreadableFile>,
    /// The asset root did not exist, so every reference counts as missing
    pub asset_root_missing: bool,
    pub referenced_assets: usize,
    pub assets_on_disk: usize,
    pub files_scanned: usize,
}

#[derive(Debug, Clone)]
pub struct AuditResult {
    pub report: MissingAssetReport,
    pub diagnostics: AuditDiagnostics,
    /// Resolved content root the scan ran from
    pub root: PathBuf,
    /// Resolved asset root the inventory was taken from
    pub asset_root: PathBuf,
}
