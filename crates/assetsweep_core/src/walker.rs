use ignore::{DirEntry, Walk, WalkBuilder};
use log::{debug, trace, warn};
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use crate::constants::{EXCLUDED_DIRS, is_content_file};

/// Scannable files under `root`.
///
/// Directories named in [`EXCLUDED_DIRS`] are pruned before descending, and
/// so is every directory sharing the asset root's name (`public` by default),
/// at any depth. The asset root itself is pruned by path as well, for asset
/// roots whose name is also used for content elsewhere in the tree.
pub fn content_files(root: &Path, asset_root: &Path) -> impl Iterator<Item = PathBuf> {
    debug!("Walking content tree from root: {}", root.display());
    let mut names: Vec<OsString> = EXCLUDED_DIRS.iter().map(OsString::from).collect();
    if let Some(name) = asset_root.file_name() {
        names.push(name.to_os_string());
    }
    let walk = build_walk(root, names, vec![asset_root.to_path_buf()]);
    files(walk).filter(|p| {
        let keep = is_content_file(p);
        if !keep {
            trace!("Skipping non-content file: {}", p.display());
        }
        keep
    })
}

/// Every file under the asset root. Nothing is pruned.
pub fn asset_files(asset_root: &Path) -> impl Iterator<Item = PathBuf> {
    debug!("Walking asset tree from root: {}", asset_root.display());
    files(build_walk(asset_root, Vec::new(), Vec::new()))
}

/// Every file under `root`, without pruning or extension filtering.
pub fn all_files(root: &Path) -> impl Iterator<Item = PathBuf> {
    debug!("Walking full tree from root: {}", root.display());
    files(build_walk(root, Vec::new(), Vec::new()))
}

// The exclusion set is the only filter: hidden files are visited and ignore
// files are not consulted. Entries are sorted per directory so two runs over
// the same tree visit files in the same order.
fn build_walk(root: &Path, names: Vec<OsString>, pruned: Vec<PathBuf>) -> Walk {
    let mut builder = WalkBuilder::new(root);
    builder.standard_filters(false).follow_links(false).sort_by_file_name(|a, b| a.cmp(b));
    if !names.is_empty() || !pruned.is_empty() {
        builder.filter_entry(move |entry| !is_pruned(entry, &names, &pruned));
    }
    builder.build()
}

fn is_pruned(entry: &DirEntry, names: &[OsString], pruned: &[PathBuf]) -> bool {
    // The walk root is never pruned, even when its name is excluded.
    if entry.depth() == 0 || !entry.file_type().is_some_and(|ft| ft.is_dir()) {
        return false;
    }
    let by_name = names.iter().any(|name| name.as_os_str() == entry.file_name());
    let by_path = pruned.iter().any(|p| p == entry.path());
    if by_name || by_path {
        trace!("Pruning directory: {}", entry.path().display());
    }
    by_name || by_path
}

fn files(walk: Walk) -> impl Iterator<Item = PathBuf> {
    walk.filter_map(|res| match res {
        Ok(dent) => Some(dent),
        Err(e) => {
            warn!("Skipping unreadable directory entry: {}", e);
            None
        }
    })
    .filter(|dent| dent.path().is_file())
    .map(DirEntry::into_path)
}
