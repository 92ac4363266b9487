use thiserror::Error;

/// Failures while reading the inventory stream. All of them abort the run
/// before any package is classified.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("failed to read inventory input")]
    Read(#[from] std::io::Error),

    #[error("malformed JSON on inventory line {line}")]
    MalformedLine {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("no record of type \"table\" found in inventory input")]
    MissingTable,

    #[error("inventory row {row} has {found} values but the table head has {expected} columns")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
}

#[derive(Debug, Error)]
pub enum AuditError {
    #[error("Unapproved licenses: {}", quoted(.licenses))]
    Unapproved { licenses: Vec<String> },

    #[error("failed to write report output")]
    Output(#[from] std::io::Error),
}

fn quoted(licenses: &[String]) -> String {
    licenses
        .iter()
        .map(|license| format!("\"{}\"", license))
        .collect::<Vec<_>>()
        .join(", ")
}
