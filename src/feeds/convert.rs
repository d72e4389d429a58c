use std::fmt::Display;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;
use std::str::FromStr;

use anyhow::Context as _;

use crate::feeds::binlog::{BinLogWriter, EventData};
use crate::feeds::classify::ErrorClassifier;
use crate::feeds::filter::EventFilter;
use crate::foundation::error::{PerspectiveError, PerspectiveResult};

/// Number of fields in a CSV input row.
const CSV_FIELDS: usize = 8;

/// Summary of one CSV conversion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConvertStats {
    /// Data rows consumed from the CSV input.
    pub rows_read: u64,
    /// Records written to the binary log (rows that passed the filter).
    pub rows_written: u64,
}

/// Convert CSV event rows into binary log records.
///
/// Input rows have no header and exactly eight fields: `event_id, event_type_id, start_time,
/// run_time, exit_status, region, progress_percent, error_reason`. A positive exit status is
/// replaced by the classifier code for the error reason; zero (success) and negative (in
/// progress) statuses are kept as-is. Any malformed row aborts the conversion.
#[tracing::instrument(skip(input, output, classifier))]
pub fn convert_csv<R: Read, W: Write>(
    input: R,
    output: W,
    filter: &EventFilter,
    classifier: &ErrorClassifier,
) -> PerspectiveResult<(W, ConvertStats)> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);
    let mut writer = BinLogWriter::new(output);
    let mut stats = ConvertStats::default();

    for record in reader.records() {
        let record = record.context("read CSV input")?;
        let line = record.position().map_or(0, |p| p.line());
        stats.rows_read += 1;

        let event = parse_row(&record, line, classifier)?;
        if filter.matches(&event) {
            writer.write(&event)?;
        }
    }

    let (output, written) = writer.finish()?;
    stats.rows_written = written;
    tracing::info!(
        rows_read = stats.rows_read,
        rows_written = stats.rows_written,
        "converted CSV input to binary log"
    );
    Ok((output, stats))
}

/// File-to-file wrapper around [`convert_csv`].
pub fn convert_csv_to_binary(
    in_path: impl AsRef<Path>,
    out_path: impl AsRef<Path>,
    filter: &EventFilter,
    classifier: &ErrorClassifier,
) -> PerspectiveResult<ConvertStats> {
    let in_path = in_path.as_ref();
    let out_path = out_path.as_ref();
    let input = File::open(in_path)
        .with_context(|| format!("open CSV input '{}'", in_path.display()))?;
    let output = File::create(out_path)
        .with_context(|| format!("create binary log '{}'", out_path.display()))?;
    let (_, stats) = convert_csv(BufReader::new(input), output, filter, classifier)?;
    Ok(stats)
}

fn parse_row(
    record: &csv::StringRecord,
    line: u64,
    classifier: &ErrorClassifier,
) -> PerspectiveResult<EventData> {
    if record.len() != CSV_FIELDS {
        return Err(PerspectiveError::decode(format!(
            "line {line}: expected {CSV_FIELDS} fields, found {}",
            record.len()
        )));
    }

    let raw_status: i8 = parse_field(record, 4, "exit status", line)?;
    let status = if raw_status > 0 {
        classifier.classify(record.get(7).unwrap_or_default())
    } else {
        raw_status
    };

    Ok(EventData {
        id: parse_field(record, 0, "event ID", line)?,
        event_type: parse_field(record, 1, "event type", line)?,
        start: parse_field(record, 2, "event start time", line)?,
        run: parse_field(record, 3, "event run time", line)?,
        status,
        region: parse_field(record, 5, "event region", line)?,
        progress: parse_field(record, 6, "event progress", line)?,
    })
}

fn parse_field<T>(
    record: &csv::StringRecord,
    idx: usize,
    name: &str,
    line: u64,
) -> PerspectiveResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = record.get(idx).unwrap_or_default().trim();
    raw.parse().map_err(|e| {
        PerspectiveError::decode(format!("line {line}: error parsing {name} '{raw}': {e}"))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/feeds/convert.rs"]
mod tests;
