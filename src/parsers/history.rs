use std::io::Read;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, WriterBuilder};

use crate::models::{CASE_FIELD_COUNT, CaseRecord};

const MAX_CONSECUTIVE_ERRORS: usize = 100;

/// Parse persisted history rows into case records
///
/// Gracefully handles malformed rows by logging and skipping them.
/// Returns an error if more than 50% of rows fail to parse or >100 consecutive errors
pub fn decode_history<R: Read>(reader: R) -> Result<Vec<CaseRecord>> {
    let mut reader =
        ReaderBuilder::new().has_headers(false).flexible(true).from_reader(reader);

    let mut cases = Vec::new();
    let mut skipped_count = 0;
    let mut total_rows = 0;
    let mut consecutive_errors = 0;

    for (row_num, row) in reader.records().enumerate() {
        let row = row.context("Failed to read row from history")?;

        // Skip blank rows
        if row.iter().all(|field| field.trim().is_empty()) {
            continue;
        }

        total_rows += 1;

        match parse_row(&row) {
            Ok(case) => {
                cases.push(case);
                consecutive_errors = 0;
            }
            Err(e) => {
                tracing::warn!(row = row_num + 1, error = %e, "Skipping malformed history row");
                skipped_count += 1;
                consecutive_errors += 1;

                if consecutive_errors >= MAX_CONSECUTIVE_ERRORS {
                    bail!(
                        "Too many consecutive parse errors ({}) in history - data may be corrupted",
                        consecutive_errors
                    );
                }
            }
        }
    }

    if total_rows > 0 {
        let failure_rate = (skipped_count as f64) / (total_rows as f64);
        if failure_rate > 0.5 {
            bail!(
                "Too many parse failures in history: {} of {} rows failed ({:.1}%)",
                skipped_count,
                total_rows,
                failure_rate * 100.0
            );
        }
    }

    if skipped_count > 0 {
        tracing::warn!(loaded = cases.len(), skipped = skipped_count, "Parsed history with errors");
    }

    Ok(cases)
}

/// Serialize case records into the persisted row format (no header row)
pub fn encode_history(cases: &[CaseRecord]) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(Vec::new());
    for case in cases {
        writer.write_record(case.to_row()).context("Failed to encode history row")?;
    }
    writer.into_inner().context("Failed to flush history rows")
}

fn parse_row(row: &StringRecord) -> Result<CaseRecord> {
    if row.len() != CASE_FIELD_COUNT {
        bail!("expected {} fields, found {}", CASE_FIELD_COUNT, row.len());
    }

    let date_filed = NaiveDate::parse_from_str(row[2].trim(), "%Y-%m-%d")
        .with_context(|| format!("invalid filing date '{}'", &row[2]))?;

    Ok(CaseRecord::new(&row[0], &row[1], date_filed, &row[3], &row[4]))
}
