//! Pretty output formatting.

use dynacrud_core::record::record_id;
use dynacrud_core::{Record, Value, ID_FIELD};

/// Format a record for display: the ID first, then each field on its own line.
pub fn format_record(record: &Record) -> String {
    let mut output = format!("ID: {}", record_id(record).unwrap_or("<none>"));
    for (field, value) in record.iter().filter(|(field, _)| *field != ID_FIELD) {
        output.push_str(&format!("\n  {}: {}", field, format_value(value)));
    }
    output
}

/// Format records for display.
pub fn format_records(records: &[Record]) -> String {
    if records.is_empty() {
        return "No records found.".to_string();
    }
    let mut output = format!("RECORDS ({})\n", records.len());
    output.push_str(&"-".repeat(40));
    for record in records {
        output.push_str(&format!("\n{}", format_record(record)));
        output.push('\n');
    }
    output
}

/// Prefix `body` with a `<banner>:` line unless `quiet` is set.
pub fn with_banner(banner: &str, body: String, quiet: bool) -> String {
    if quiet {
        body
    } else {
        format!("{}:\n{}", banner, body)
    }
}

/// Strings print bare; everything else prints as JSON.
fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
