use assetsweep_core::{content_files, relative_slash_path};
use indexmap::{IndexMap, IndexSet};
use log::{debug, info, trace, warn};
use rayon::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
    thread,
};

use crate::{
    error::AuditError,
    extractor::{extract, normalize_asset_path},
    types::UnreadableFile,
};

/// Asset path -> files referencing it, both in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct ReferenceIndex {
    entries: IndexMap<String, IndexSet<String>>,
}

impl ReferenceIndex {
    /// Record that `file` references `asset`. Returns false if the pair was already known.
    pub fn insert(&mut self, asset: &str, file: &str) -> bool {
        let asset = normalize_asset_path(asset);
        if let Some(files) = self.entries.get_mut(asset) {
            return files.insert(file.to_string());
        }
        self.entries.insert(asset.to_string(), IndexSet::from([file.to_string()]));
        true
    }

    pub fn get(&self, asset: &str) -> Option<&IndexSet<String>> {
        self.entries.get(asset)
    }

    pub fn contains(&self, asset: &str) -> bool {
        self.entries.contains_key(asset)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &IndexSet<String>)> {
        self.entries.iter()
    }
}

/// Everything the reference scan produced: the index plus the files it could not read.
#[derive(Debug, Clone, Default)]
pub struct ReferenceScan {
    pub index: ReferenceIndex,
    pub unreadable: Vec<UnreadableFile>,
    pub files_scanned: usize,
}

impl ReferenceScan {
    // Single writer: every per-file result passes through here.
    fn merge(&mut self, scan: FileScan) {
        self.files_scanned += 1;
        match scan.outcome {
            Ok(assets) => {
                for asset in &assets {
                    self.index.insert(asset, &scan.file);
                }
            }
            Err(e) => {
                warn!("Skipping {}: {}", scan.file, e);
                self.unreadable.push(UnreadableFile { file: scan.file, reason: e.to_string() });
            }
        }
    }
}

struct FileScan {
    file: String,
    outcome: Result<IndexSet<String>, AuditError>,
}

fn scan_file(root: &Path, path: &Path) -> FileScan {
    let file = relative_slash_path(root, path).unwrap_or_else(|| path.to_string_lossy().into());
    trace!("Thread {:?} scanning: {}", thread::current().id(), file);
    let outcome = read_text(path).map(|content| extract(&content));
    if let Ok(assets) = &outcome {
        trace!("Found {} asset references in {}", assets.len(), file);
    }
    FileScan { file, outcome }
}

fn read_text(path: &Path) -> Result<String, AuditError> {
    let bytes = fs::read(path)
        .map_err(|source| AuditError::UnreadableFile { path: path.to_path_buf(), source })?;
    String::from_utf8(bytes).map_err(|_| AuditError::Undecodable { path: path.to_path_buf() })
}

/// Scan every content file under `root` (skipping the asset root) for asset references.
///
/// Files are read and matched in parallel; results are folded into the index
/// in walk order, so the output does not depend on thread scheduling. A file
/// that cannot be read is recorded and never aborts the scan.
pub fn build_reference_index(root: &Path, asset_root: &Path) -> ReferenceScan {
    let files: Vec<PathBuf> = content_files(root, asset_root).collect();
    info!("Scanning {} content files for asset references", files.len());

    let scans: Vec<FileScan> = files.par_iter().map(|path| scan_file(root, path)).collect();

    let mut acc = ReferenceScan::default();
    for scan in scans {
        acc.merge(scan);
    }

    debug!(
        "Reference scan complete: {} distinct assets from {} files ({} unreadable)",
        acc.index.len(),
        acc.files_scanned,
        acc.unreadable.len()
    );
    acc
}
