//! Content migration between two site layouts.
//!
//! Copies per-locale blog posts from a flat source directory (`blocks/en`,
//! `blocks/fr`, ...) into a site's posts tree and loose images into the
//! site's image directory. Nothing is overwritten; every file ends up in one
//! of three buckets (copied, already existing, failed), and the source tree
//! is only removed on request when nothing failed.
//!
//! # Examples
//!
//! ```no_run
//! use assetsweep_migrate::{Config, run_migration};
//! use clap::Parser;
//!
//! # fn main() -> anyhow::Result<()> {
//! let cfg = Config::parse_from(["migrate", "--source", "blocks", "--target", "apps/landing"]);
//! let summary = run_migration(&cfg)?;
//! println!("{} failures", summary.failure_count());
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod migrator;
mod reporter;
mod types;

// Re-export public API
pub use config::Config;
pub use error::MigrateError;
pub use migrator::{migrate, run_migration};
pub use reporter::print_migration_summary;
pub use types::{Category, CleanupStatus, Failure, MigrationSummary};
