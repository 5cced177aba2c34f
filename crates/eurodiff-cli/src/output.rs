//! Result formatting.

use std::io::{self, Write};

use eurodiff_engine::CompletionRecord;

/// Write one case's results: a `Case Number k` header, then one
/// `name day` line per record in the order given.
pub fn write_case<W: Write>(
    out: &mut W,
    case_number: usize,
    records: &[CompletionRecord],
) -> io::Result<()> {
    writeln!(out, "Case Number {case_number}")?;
    for record in records {
        writeln!(out, "{} {}", record.name, record.day)?;
    }
    Ok(())
}
