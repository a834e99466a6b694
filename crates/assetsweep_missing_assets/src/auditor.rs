use anyhow::Result;
use assetsweep_core::resolve_dir;
use log::{debug, info, warn};
use std::path::Path;

use crate::{
    config::Config,
    error::AuditError,
    index::{ReferenceScan, build_reference_index},
    inventory::{Inventory, build_inventory},
    types::{AuditDiagnostics, AuditResult, MissingAssetReport},
};

pub fn run_missing_assets_check(mut cfg: Config) -> Result<AuditResult> {
    info!("Starting missing asset check");

    // Initialize config (resolve root and asset root)
    cfg.initialize()?;
    let result = audit(cfg.root()?, cfg.asset_root()?)?;

    info!("Missing asset check complete. Found {} missing assets", result.report.len());
    Ok(result)
}

/// Compare the assets referenced under `root` against those present under `asset_root`.
///
/// Fails only when `root` itself does not exist. Unreadable files and a
/// missing asset root are reported through [`AuditDiagnostics`].
///
/// Both paths are resolved first, so `./` and `public` prune the same
/// directory as their absolute spellings.
pub fn audit(root: &Path, asset_root: &Path) -> Result<AuditResult, AuditError> {
    if !root.is_dir() {
        return Err(AuditError::MissingContentRoot(root.to_path_buf()));
    }
    let root = resolve_dir(root);
    let asset_root = resolve_dir(asset_root);
    debug!("Auditing {} against {}", root.display(), asset_root.display());

    let ReferenceScan { index, unreadable, files_scanned } =
        build_reference_index(&root, &asset_root);

    let (inventory, asset_root_missing) = match build_inventory(&asset_root) {
        Ok(inventory) => (inventory, false),
        Err(e @ AuditError::MissingAssetRoot(_)) => {
            warn!("{}; every referenced asset will be reported missing", e);
            (Inventory::default(), true)
        }
        Err(e) => return Err(e),
    };

    let mut report = MissingAssetReport::default();
    for (asset, files) in index.iter() {
        if inventory.contains(asset) {
            continue;
        }
        debug!("Missing asset '{}' referenced by {} files", asset, files.len());
        report.insert(asset.clone(), files.iter().cloned().collect());
    }

    let diagnostics = AuditDiagnostics {
        unreadable,
        asset_root_missing,
        referenced_assets: index.len(),
        assets_on_disk: inventory.len(),
        files_scanned,
    };
    debug!("Audit diagnostics: {:?}", diagnostics);

    Ok(AuditResult { report, diagnostics, root, asset_root })
}
