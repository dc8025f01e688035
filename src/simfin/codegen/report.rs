use std::io::Write;

use crate::simfin::codegen::error::Result;
use crate::simfin::codegen::model::DuplicateReport;
use crate::simfin::codegen::reconcile::find_duplicates;

/// Formats the duplicates found in `values` as diagnostic lines.
///
/// Produces nothing when there are no duplicates; otherwise a count header,
/// one `- value` line per duplicate, and a trailing blank line.
pub fn report_duplicates(values: &[String]) -> Vec<String> {
    duplicate_lines(&find_duplicates(values))
}

fn duplicate_lines(duplicates: &[String]) -> Vec<String> {
    if duplicates.is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::with_capacity(duplicates.len() + 2);
    lines.push(format!("Duplicates: {}", duplicates.len()));
    lines.extend(duplicates.iter().map(|dup| format!("- {dup}")));
    lines.push(String::new());
    lines
}

/// Writes the name report followed by the shortcut report.
pub fn write_report<W: Write>(writer: &mut W, report: &DuplicateReport) -> Result<()> {
    for line in duplicate_lines(&report.names)
        .into_iter()
        .chain(duplicate_lines(&report.shortcuts))
    {
        writeln!(writer, "{line}")?;
    }
    writer.flush()?;
    Ok(())
}
