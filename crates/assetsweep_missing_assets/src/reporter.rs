use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use anyhow::{Context, Result};
use assetsweep_core::relativize_to_cwd;
use colored::Colorize;
use log::{debug, info, trace};

use crate::types::{AuditResult, MissingAssetReport};

fn display_path(result: &AuditResult, file: &str) -> String {
    relativize_to_cwd(&result.root, file)
}

pub fn print_no_missing_message<W: Write>(writer: &mut W, result: &AuditResult) -> io::Result<()> {
    debug!("No missing assets");
    writeln!(
        writer,
        "{} No missing images. {} referenced, {} on disk.",
        "✓".green().bold(),
        result.diagnostics.referenced_assets,
        result.diagnostics.assets_on_disk
    )?;
    writer.flush()?;
    Ok(())
}

/// Print the report grouped by asset, with every referencing file beneath it.
pub fn print_missing_tree<W: Write>(writer: &mut W, result: &AuditResult) -> io::Result<()> {
    debug!("Printing missing asset tree for {} assets", result.report.len());

    writeln!(writer, "{} Missing images and their references\n", "⚠".yellow().bold())?;

    for (asset, files) in result.report.iter() {
        trace!("Processing asset: {} with {} references", asset, files.len());
        writeln!(writer, "{}", asset.bright_white().bold())?;

        for (idx, file) in files.iter().enumerate() {
            let prefix = if idx == files.len() - 1 { "└──" } else { "├──" };
            writeln!(writer, "{}  {}", prefix.dimmed(), display_path(result, file).blue())?;
        }

        writeln!(writer)?;
    }

    print_summary(writer, result)?;

    writer.flush()?;
    Ok(())
}

fn print_summary<W: Write>(writer: &mut W, result: &AuditResult) -> io::Result<()> {
    let references: usize = result.report.iter().map(|(_, files)| files.len()).sum();

    writeln!(writer, "{}", "─".repeat(60).dimmed())?;
    writeln!(writer, "{}", "Summary".bold())?;
    writeln!(writer, "  Missing images: {}", result.report.len().to_string().red().bold())?;
    writeln!(writer, "  Broken references: {}", references.to_string().yellow())?;
    writeln!(
        writer,
        "  Referenced: {}, on disk: {}",
        result.diagnostics.referenced_assets, result.diagnostics.assets_on_disk
    )?;
    Ok(())
}

/// Print conditions that make the report less trustworthy: a missing asset
/// root and files that could not be scanned.
pub fn print_diagnostics<W: Write>(writer: &mut W, result: &AuditResult) -> io::Result<()> {
    let diagnostics = &result.diagnostics;

    if diagnostics.asset_root_missing {
        writeln!(
            writer,
            "{} Asset root {} does not exist; every reference is reported missing.",
            "✗".red().bold(),
            result.asset_root.display().to_string().yellow()
        )?;
    }

    if !diagnostics.unreadable.is_empty() {
        writeln!(
            writer,
            "{} Could not scan {} files:",
            "⚠".yellow().bold(),
            diagnostics.unreadable.len().to_string().yellow()
        )?;
        for (idx, unreadable) in diagnostics.unreadable.iter().enumerate() {
            let prefix = if idx == diagnostics.unreadable.len() - 1 { "└──" } else { "├──" };
            writeln!(
                writer,
                "{}  {} - {}",
                prefix.dimmed(),
                display_path(result, &unreadable.file).blue(),
                unreadable.reason.dimmed()
            )?;
        }
    }

    if diagnostics.asset_root_missing || !diagnostics.unreadable.is_empty() {
        writeln!(writer)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the report as pretty-printed JSON.
pub fn write_json_report(path: &Path, report: &MissingAssetReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
    fs::write(path, json + "\n")
        .with_context(|| format!("Failed to write report to {}", path.display()))?;
    info!("Wrote report for {} missing assets to {}", report.len(), path.display());
    Ok(())
}
