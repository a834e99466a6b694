//! Constants for file extensions and directory pruning.
//!
//! This module centralizes extension handling so that walking, reference
//! extraction and inventory building agree on what counts as content and what
//! counts as an asset.
//!
//! ## Content Extensions
//!
//! - **Source**: `.ts`, `.tsx`, `.mts`, `.cts`, `.js`, `.jsx`, `.mjs`, `.cjs`
//! - **Content documents**: `.md`, `.mdx`
//! - **Markup**: `.html`
//!
//! Content extensions are matched case-sensitively. Asset extensions are
//! matched case-insensitively (`hero.PNG` is an asset).

use std::path::Path;

/// File extensions of files scanned for asset references
pub const CONTENT_EXTENSIONS: &[&str] = &[
    "ts",   // TypeScript
    "tsx",  // TypeScript with JSX
    "mts",  // TypeScript module
    "cts",  // TypeScript CommonJS
    "js",   // JavaScript
    "jsx",  // JavaScript with JSX
    "mjs",  // JavaScript module
    "cjs",  // JavaScript CommonJS
    "md",   // Markdown
    "mdx",  // MDX
    "html", // HTML
];

/// Image extensions recognized as assets
pub const ASSET_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "svg", "webp"];

/// Directory names never descended into when scanning content.
///
/// The content walk adds the asset root's directory name to these.
pub const EXCLUDED_DIRS: &[&str] = &[
    ".next",        // Next.js build cache
    ".turbo",       // Turborepo cache
    "node_modules", // installed dependencies
];

pub fn is_content_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()).is_some_and(|ext| CONTENT_EXTENSIONS.contains(&ext))
}

pub fn is_asset_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| ASSET_EXTENSIONS.iter().any(|a| a.eq_ignore_ascii_case(ext)))
}
