use indexmap::IndexMap;
use crate::license::EnrichedRecord;

pub const CSV_HEADER: &str = "Name, Version, SPDX, Description, Authors/Contributors, URLs";

/// One CSV line for a reported package. Every field is quoted.
pub fn format_csv_row(record: &EnrichedRecord) -> String {
    let fields = [
        record.record.name.clone(),
        record.record.version().to_string(),
        record.record.license().to_string(),
        record.description.clone().unwrap_or_default(),
        record.everyone(),
        record.urls(),
    ];

    fields
        .iter()
        .map(|field| quote(field))
        .collect::<Vec<_>>()
        .join(", ")
}

/// License counts as a JSON object, in first-seen order.
pub fn format_counts(counts: &IndexMap<String, usize>) -> String {
    // serializing string keys and integers cannot fail
    serde_json::to_string_pretty(counts).unwrap_or_default()
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
