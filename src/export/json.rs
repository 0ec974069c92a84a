use anyhow::Result;

use crate::core::model::DocumentRecord;
use crate::export::RecordWriter;

/// JSON array of records, the byte-stable interchange format.
#[derive(Debug, Clone, Default)]
pub struct JsonWriter;

impl JsonWriter {
    pub fn new() -> Self {
        Self
    }
}

impl RecordWriter for JsonWriter {
    fn render(&self, records: &[DocumentRecord]) -> Result<String> {
        Ok(serde_json::to_string_pretty(records)?)
    }
}
