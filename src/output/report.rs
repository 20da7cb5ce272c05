//! Aggregated SVG report
//!
//! Each recorded fragment becomes an HTML comment naming its source page,
//! followed by the fragment markup. Entries are separated by a blank line and
//! appear in the order they were first discovered.

use crate::output::{OutputError, OutputResult};
use crate::storage::FragmentRecord;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes the report for the given records to `output_path`
///
/// The file is created or truncated. An empty record list produces an empty
/// file.
pub fn write_report(records: &[FragmentRecord], output_path: &Path) -> OutputResult<()> {
    let report = format_report(records);

    let write_err = |source: std::io::Error| OutputError::Write {
        path: output_path.display().to_string(),
        source,
    };

    let mut file = File::create(output_path).map_err(write_err)?;
    file.write_all(report.as_bytes()).map_err(write_err)?;

    Ok(())
}

/// Formats records as the report document
///
/// # Example
///
/// ```
/// use svg_sweep::output::format_report;
/// use svg_sweep::storage::FragmentRecord;
///
/// let records = vec![FragmentRecord {
///     source_url: "https://example.com/".to_string(),
///     body: "<svg></svg>".to_string(),
/// }];
/// assert_eq!(format_report(&records), "<!-- https://example.com/ -->\n<svg></svg>");
/// ```
pub fn format_report(records: &[FragmentRecord]) -> String {
    records
        .iter()
        .map(|record| format!("<!-- {} -->\n{}", record.source_url, record.body))
        .collect::<Vec<_>>()
        .join("\n\n")
}
