use anyhow::{Result, anyhow};
use assetsweep_core::{find_git_root, resolve_dir};
use clap::Parser;
use log::{debug, info};
use std::path::PathBuf;

/// Asset directory used when `--asset-root` is not given, relative to the root
const DEFAULT_ASSET_DIR: &str = "public";

#[derive(Debug, Clone, Parser)]
#[command(name = "missing-assets")]
#[command(about = "Find image references that point at files missing from the asset directory")]
pub struct Config {
    /// Root directory of the content tree (defaults to git root)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Directory holding the actual asset files (defaults to <root>/public)
    #[arg(long)]
    pub asset_root: Option<PathBuf>,

    /// Write the missing-asset report as JSON to this file
    #[arg(long)]
    pub report: Option<PathBuf>,
}

impl Config {
    /// Initialize the config by resolving the content root and the asset root
    pub fn initialize(&mut self) -> Result<()> {
        let root = if let Some(r) = self.root.take() {
            debug!("Using provided root directory: {:?}", r);
            resolve_dir(&r)
        } else {
            debug!("No root provided, searching for git root");
            find_git_root()?
        };
        info!("Using root directory: {}", root.display());

        let asset_root = match self.asset_root.take() {
            Some(a) => resolve_dir(&a),
            None => resolve_dir(&root.join(DEFAULT_ASSET_DIR)),
        };
        info!("Using asset root: {}", asset_root.display());

        self.root = Some(root);
        self.asset_root = Some(asset_root);
        Ok(())
    }

    /// Get the root directory, returning an error if not initialized
    pub fn root(&self) -> Result<&PathBuf> {
        self.root
            .as_ref()
            .ok_or_else(|| anyhow!("Config not initialized - call initialize() first"))
    }

    /// Get the asset root, returning an error if not initialized
    pub fn asset_root(&self) -> Result<&PathBuf> {
        self.asset_root
            .as_ref()
            .ok_or_else(|| anyhow!("Config not initialized - call initialize() first"))
    }
}
