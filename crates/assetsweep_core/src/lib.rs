//! Core utilities for assetsweep tools.
//!
//! This crate provides shared functionality for working over a site's content
//! tree, including:
//! - The fixed extension sets for scannable content and image assets
//! - Walking a tree in content or asset mode with directory pruning
//! - Resolving root directories (git root discovery, path cleaning)
//! - Rendering root-relative and cwd-relative paths

mod config;
mod constants;
mod paths;
mod walker;

// Re-export public API
pub use config::{find_git_root, resolve_dir};
pub use constants::{
    ASSET_EXTENSIONS, CONTENT_EXTENSIONS, EXCLUDED_DIRS, is_asset_file, is_content_file,
};
pub use paths::{make_relative, relative_slash_path, relativize_to_cwd};
pub use walker::{all_files, asset_files, content_files};
