use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chardetng::EncodingDetector;

use crate::extract::{Extraction, Extractor};

/// Plain-text extraction: sniff the encoding from the raw bytes, decode,
/// and report the detected encoding name as the method label.
#[derive(Debug, Clone, Default)]
pub struct TxtExtractor;

impl TxtExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Extractor for TxtExtractor {
    fn extract(&self, path: &Path) -> Result<Extraction> {
        let bytes = fs::read(path)
            .with_context(|| format!("failed to read text file {}", path.display()))?;

        let mut detector = EncodingDetector::new();
        detector.feed(&bytes, true);
        let encoding = detector.guess(None, true);

        let (text, _, _) = encoding.decode(&bytes);
        Ok(Extraction {
            text: text.into_owned(),
            method: encoding.name().to_string(),
        })
    }
}
