use anyhow::Result;
use assetsweep_fix_names::Config as FixNamesConfig;
use assetsweep_migrate::Config as MigrateConfig;
use assetsweep_missing_assets::Config as MissingAssetsConfig;
use clap::{Parser, Subcommand};
use colored::Colorize;
use log::{debug, info};
use std::io::{BufWriter, Write};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "assetsweep")]
#[command(about = "Tools for keeping a static site's content and assets in sync", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Find image references that point at files missing from the asset directory
    MissingAssets(MissingAssetsConfig),
    /// Rename files with a doubled extension such as post.mdx.md
    FixNames(FixNamesConfig),
    /// Copy per-locale posts and loose images into the site layout
    Migrate(MigrateConfig),
}

fn main() -> Result<()> {
    env_logger::init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());

    let cli = Cli::parse();
    debug!("Parsed CLI arguments: {:?}", cli.command);

    let start = Instant::now();

    match cli.command {
        Commands::MissingAssets(cfg) => {
            let num_threads = rayon::current_num_threads();
            info!("Running missing asset check (using {} threads)", num_threads);
            debug!("Config: root={:?}, asset_root={:?}", cfg.root, cfg.asset_root);

            let result = assetsweep_missing_assets::run_missing_assets_check(cfg.clone())?;
            debug!(
                "Found {} missing assets under {} (assets in {})",
                result.report.len(),
                result.root.display(),
                result.asset_root.display()
            );

            assetsweep_missing_assets::print_diagnostics(&mut stdout, &result)?;
            if result.report.is_empty() {
                assetsweep_missing_assets::print_no_missing_message(&mut stdout, &result)?;
            } else {
                assetsweep_missing_assets::print_missing_tree(&mut stdout, &result)?;
            }

            if let Some(path) = &cfg.report {
                assetsweep_missing_assets::write_json_report(path, &result.report)?;
                writeln!(stdout, "Detailed report saved to {}", path.display().to_string().cyan())?;
            }

            writeln!(
                stdout,
                "\n{} Finished in {}ms on {} files (using {} threads).",
                "●".bright_blue(),
                start.elapsed().as_millis().to_string().cyan(),
                result.diagnostics.files_scanned.to_string().cyan(),
                num_threads.to_string().cyan()
            )?;
            stdout.flush()?;

            // Non-zero exit to fail CI
            if !result.report.is_empty() || result.diagnostics.asset_root_missing {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::FixNames(cfg) => {
            info!("Running filename correction under {}", cfg.root.display());
            let outcome = assetsweep_fix_names::run_fix_names(&cfg)?;
            assetsweep_fix_names::print_fix_summary(&mut stdout, &outcome)?;
            stdout.flush()?;

            if !outcome.failures.is_empty() {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Migrate(cfg) => {
            info!("Running migration from {}", cfg.source.display());
            let summary = assetsweep_migrate::run_migration(&cfg)?;
            assetsweep_migrate::print_migration_summary(&mut stdout, &summary)?;
            stdout.flush()?;

            if summary.has_failures() {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}
