use std::io::{self, Write};

use colored::Colorize;
use log::debug;

use crate::types::FixOutcome;

pub fn print_fix_summary<W: Write>(writer: &mut W, outcome: &FixOutcome) -> io::Result<()> {
    debug!("Printing rename summary");
    let verb = if outcome.dry_run { "Would rename" } else { "Renamed" };

    for rename in &outcome.renamed {
        writeln!(writer, "{} {}: {} -> {}", "✓".green(), verb, rename.from, rename.to.blue())?;
    }
    for conflict in &outcome.conflicts {
        writeln!(
            writer,
            "{} Skipped {}: {} already exists",
            "⊙".yellow(),
            conflict.from,
            conflict.to.yellow()
        )?;
    }
    for failure in &outcome.failures {
        writeln!(writer, "{} Error renaming {}: {}", "✗".red(), failure.file, failure.reason)?;
    }

    if outcome.renamed.is_empty() && outcome.conflicts.is_empty() && outcome.failures.is_empty() {
        writeln!(writer, "{} Nothing to rename.", "✓".green().bold())?;
    }

    writeln!(
        writer,
        "\n{} {} checked, {} {}, {} skipped, {} failed.",
        "●".bright_blue(),
        outcome.files_checked.to_string().cyan(),
        outcome.renamed.len().to_string().cyan(),
        verb.to_lowercase(),
        outcome.conflicts.len(),
        outcome.failures.len()
    )?;
    writer.flush()?;
    Ok(())
}
