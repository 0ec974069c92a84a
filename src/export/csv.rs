use anyhow::Result;

use crate::core::model::DocumentRecord;
use crate::export::RecordWriter;

/// CSV with a header row; legibility prints with exactly 3 decimals.
#[derive(Debug, Clone, Default)]
pub struct CsvWriter;

impl CsvWriter {
    pub fn new() -> Self {
        Self
    }
}

fn escape(field: &str) -> String {
    if field.contains(['"', ',', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

impl RecordWriter for CsvWriter {
    fn render(&self, records: &[DocumentRecord]) -> Result<String> {
        let mut out = String::from("file,legibility,extraction\n");
        for record in records {
            out.push_str(&format!(
                "{},{:.3},{}\n",
                escape(&record.file),
                record.legibility,
                escape(&record.extraction)
            ));
        }
        Ok(out)
    }
}
