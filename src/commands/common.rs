//! Output helpers shared across commands.

use serde::Serialize;
use std::fmt::Display;
use std::io::Write;

use crate::Result;

/// How records are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Print one record per line in the requested format
pub fn write_records<W, T>(out: &mut W, records: &[T], format: OutputFormat) -> Result<()>
where
    W: Write,
    T: Display + Serialize,
{
    for record in records {
        match format {
            OutputFormat::Text => writeln!(out, "{}", record)?,
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(record)?)?,
        }
    }
    Ok(())
}
