//! Doubled-extension filename correction.
//!
//! Content exported from some editors lands on disk as `post.mdx.md`. This
//! crate renames every such file under a root to drop the trailing secondary
//! extension (`post.mdx`). Existing targets are never overwritten, and a
//! second run over the same tree does nothing.
//!
//! # Examples
//!
//! ```no_run
//! use assetsweep_fix_names::{Config, run_fix_names};
//!
//! # fn main() -> anyhow::Result<()> {
//! let cfg = Config {
//!     root: std::path::PathBuf::from("apps/landing/app/blog/_posts"),
//!     from_suffix: ".mdx.md".to_string(),
//!     to_suffix: ".mdx".to_string(),
//!     dry_run: true,
//! };
//!
//! let outcome = run_fix_names(&cfg)?;
//! println!("{} files would be renamed", outcome.renamed.len());
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod renamer;
mod reporter;
mod types;

// Re-export public API
pub use config::Config;
pub use error::FixNamesError;
pub use renamer::{fix_names, run_fix_names};
pub use reporter::print_fix_summary;
pub use types::{FixOutcome, Rename, RenameFailure};
