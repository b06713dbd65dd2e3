//! CSV export functionality.
//!
//! Writes the result collection as UTF-8 comma-separated text with a header
//! row, one row per (URL, device) outcome, to a file or stdout.

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use csv::Writer;

use crate::models::Outcome;

use super::row::ResultRow;

/// Exports outcomes to CSV format.
///
/// # Arguments
///
/// * `outcomes` - The result collection, in task order
/// * `output` - Output file path (or stdout if None)
///
/// # Returns
///
/// The number of data rows written, or an error if the file cannot be
/// created or written.
pub fn export_csv(outcomes: &[Outcome], output: Option<&Path>) -> Result<usize> {
    let mut writer: Writer<Box<dyn Write>> = if let Some(output_path) = output {
        let file = std::fs::File::create(output_path).with_context(|| {
            format!("Failed to create output file: {}", output_path.display())
        })?;
        Writer::from_writer(Box::new(file) as Box<dyn Write>)
    } else {
        Writer::from_writer(Box::new(io::stdout()) as Box<dyn Write>)
    };

    writer.write_record(ResultRow::HEADER)?;

    let mut record_count = 0;
    for outcome in outcomes {
        let row = ResultRow::from(outcome);
        writer.write_record(row.fields())?;
        record_count += 1;
    }

    writer.flush()?;
    Ok(record_count)
}
