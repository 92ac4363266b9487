use serde::Deserialize;
use serde_json::Value;
use std::io::Read;
use crate::error::InventoryError;

/// The tabular dependency listing produced by the inventory tool
/// (`yarn licenses list --json` and friends).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InventoryTable {
    pub head: Vec<String>,
    pub body: Vec<Vec<String>>,
}

impl InventoryTable {
    /// Iterate over the rows as `(column, value)` pairs.
    pub fn rows(&self) -> impl Iterator<Item = Vec<(&str, &str)>> + '_ {
        self.body.iter().map(move |row| {
            self.head
                .iter()
                .map(String::as_str)
                .zip(row.iter().map(String::as_str))
                .collect()
        })
    }

    fn validate(&self) -> Result<(), InventoryError> {
        let expected = self.head.len();
        for (index, row) in self.body.iter().enumerate() {
            if row.len() != expected {
                return Err(InventoryError::RowWidth {
                    row: index + 1,
                    expected,
                    found: row.len(),
                });
            }
        }
        Ok(())
    }
}

/// Parse a newline-delimited JSON stream and return the last `"table"` record.
///
/// Every non-blank line must be valid JSON, even when it is not a table
/// record. Records of any other type are ignored.
pub fn parse_inventory(content: &str) -> Result<InventoryTable, InventoryError> {
    let mut last_table = None;

    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let record: Value = serde_json::from_str(line)
            .map_err(|source| InventoryError::MalformedLine { line: index + 1, source })?;

        if record.get("type").and_then(Value::as_str) == Some("table") {
            last_table = Some((index + 1, record));
        }
    }

    let (line, mut record) = last_table.ok_or(InventoryError::MissingTable)?;
    let data = record.get_mut("data").map(Value::take).unwrap_or(Value::Null);

    let table: InventoryTable = serde_json::from_value(data)
        .map_err(|source| InventoryError::MalformedLine { line, source })?;
    table.validate()?;

    tracing::debug!(
        columns = table.head.len(),
        rows = table.body.len(),
        "parsed inventory table"
    );

    Ok(table)
}

/// Read the whole stream into memory, then parse it.
pub fn read_inventory<R: Read>(mut reader: R) -> Result<InventoryTable, InventoryError> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    parse_inventory(&content)
}
