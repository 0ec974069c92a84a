pub mod pdf;
pub mod txt;

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;

pub use pdf::{PdfExtractor, PdfMode};
pub use txt::TxtExtractor;

/// Text pulled out of a source file plus the method label that produced it.
/// The label is opaque to the scorer and passed through to the output
/// record (an encoding name, "tesseract", "embedded", ...).
#[derive(Debug, Clone)]
pub struct Extraction {
    pub text: String,
    pub method: String,
}

pub trait Extractor {
    fn extract(&self, path: &Path) -> Result<Extraction>;
}

/// Explicit extension → extractor table, built once at startup.
/// Files whose extension has no entry are skipped by the evaluator.
#[derive(Default)]
pub struct ExtractorSet {
    extractors: HashMap<String, Box<dyn Extractor>>,
}

impl ExtractorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock table: ".txt" via encoding detection, ".pdf" via OCR.
    pub fn with_defaults() -> Self {
        let mut set = Self::new();
        set.register("txt", Box::new(TxtExtractor::new()));
        set.register("pdf", Box::new(PdfExtractor::new(PdfMode::Ocr)));
        set
    }

    pub fn register(&mut self, extension: &str, extractor: Box<dyn Extractor>) {
        self.extractors.insert(extension.to_lowercase(), extractor);
    }

    pub fn for_path(&self, path: &Path) -> Option<&dyn Extractor> {
        let extension = path.extension()?.to_str()?.to_lowercase();
        self.extractors.get(&extension).map(|boxed| boxed.as_ref())
    }
}
