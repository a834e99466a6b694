use std::io::{self, Write};

use colored::Colorize;
use log::debug;

use crate::types::{CleanupStatus, MigrationSummary};

pub fn print_migration_summary<W: Write>(
    writer: &mut W,
    summary: &MigrationSummary,
) -> io::Result<()> {
    debug!("Printing migration summary");
    writeln!(writer, "{}", "Migration Summary".bold())?;

    writeln!(writer, "\nSuccessfully copied:")?;
    for (category, items) in &summary.successful {
        writeln!(writer, "  {}:", category.to_string().bold())?;
        for item in items {
            writeln!(writer, "    {} {}", "✓".green(), item)?;
        }
        writeln!(writer, "    Total: {}", items.len())?;
    }

    writeln!(writer, "\nSkipped (already existing):")?;
    for (category, items) in &summary.existing {
        writeln!(writer, "  {}:", category.to_string().bold())?;
        for item in items {
            writeln!(writer, "    {} {}", "⊙".yellow(), item)?;
        }
        writeln!(writer, "    Total: {}", items.len())?;
    }

    writeln!(writer, "\nFailed:")?;
    for (category, failures) in &summary.failed {
        writeln!(writer, "  {}:", category.to_string().bold())?;
        for failure in failures {
            writeln!(writer, "    {} {} - {}", "✗".red(), failure.item, failure.reason.dimmed())?;
        }
        writeln!(writer, "    Total: {}", failures.len())?;
    }

    match &summary.cleanup {
        CleanupStatus::NotRequested => {}
        CleanupStatus::Skipped => {
            writeln!(writer, "\n{} Skipping cleanup due to migration failures", "⚠".yellow())?
        }
        CleanupStatus::Removed => {
            writeln!(writer, "\n{} Source directory cleaned up", "✓".green())?
        }
        CleanupStatus::Failed(reason) => {
            writeln!(writer, "\n{} Failed to clean up source directory: {}", "✗".red(), reason)?
        }
    }

    writer.flush()?;
    Ok(())
}
