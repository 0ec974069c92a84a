use anyhow::Result;

use crate::core::model::DocumentRecord;
use crate::export::RecordWriter;

/// Column-aligned plain-text table for terminal output.
#[derive(Debug, Clone, Default)]
pub struct TableWriter;

impl TableWriter {
    pub fn new() -> Self {
        Self
    }
}

impl RecordWriter for TableWriter {
    fn render(&self, records: &[DocumentRecord]) -> Result<String> {
        // display width, so non-ASCII file names keep the columns aligned
        let file_width = records
            .iter()
            .map(|r| r.file.chars().count())
            .chain(std::iter::once("file".chars().count()))
            .max()
            .unwrap_or(4);

        let mut out = format!("{:<file_width$}  legibility  extraction\n", "file");
        for record in records {
            out.push_str(&format!(
                "{:<file_width$}  {:>10.3}  {}\n",
                record.file, record.legibility, record.extraction
            ));
        }
        Ok(out)
    }
}
