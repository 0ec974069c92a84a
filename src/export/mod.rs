pub mod csv;
pub mod json;
pub mod table;

use anyhow::Result;

use crate::core::model::DocumentRecord;

pub use csv::CsvWriter;
pub use json::JsonWriter;
pub use table::TableWriter;

pub trait RecordWriter {
    fn render(&self, records: &[DocumentRecord]) -> Result<String>;
}
