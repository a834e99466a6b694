//! Missing asset detection for static site content trees.
//!
//! This crate scans a site's source files for image references and compares
//! them against the files that actually exist under the asset directory,
//! reporting every referenced image that is missing along with the files
//! that reference it.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```no_run
//! use assetsweep_missing_assets::{Config, run_missing_assets_check};
//! use std::io::{BufWriter, Write};
//!
//! # fn main() -> anyhow::Result<()> {
//! let cfg = Config {
//!     root: Some(std::path::PathBuf::from("/path/to/site")),
//!     asset_root: None,
//!     report: None,
//! };
//!
//! let result = run_missing_assets_check(cfg)?;
//!
//! if !result.report.is_empty() {
//!     // Use buffered output for better performance
//!     let mut stdout = BufWriter::new(std::io::stdout());
//!     assetsweep_missing_assets::print_missing_tree(&mut stdout, &result)?;
//!     stdout.flush()?;
//! }
//! # Ok(())
//! # }
//! ```

mod auditor;
mod config;
mod error;
mod extractor;
mod index;
mod inventory;
mod reporter;
mod types;

// Re-export public API
pub use auditor::{audit, run_missing_assets_check};
pub use config::Config;
pub use error::AuditError;
pub use extractor::{RuleKind, extract, extract_with_rules, normalize_asset_path};
pub use index::{ReferenceIndex, ReferenceScan, build_reference_index};
pub use inventory::{Inventory, build_inventory};
pub use reporter::{
    print_diagnostics, print_missing_tree, print_no_missing_message, write_json_report,
};
pub use types::{AuditDiagnostics, AuditResult, MissingAssetReport, UnreadableFile};
