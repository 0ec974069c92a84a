use serde::{Deserialize, Serialize};

/// Per-token verdict from the classifier.
///
/// `valid` implies `countable`: a token can only be correct if it entered
/// the denominator in the first place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassificationResult {
    pub countable: bool,
    pub valid: bool,
}

impl ClassificationResult {
    pub const EXCLUDED: Self = Self {
        countable: false,
        valid: false,
    };

    pub const FOUND: Self = Self {
        countable: true,
        valid: false,
    };

    pub const CORRECT: Self = Self {
        countable: true,
        valid: true,
    };
}

/// One result row per evaluated input file.
///
/// `legibility` is already truncated to 3 decimals; `extraction` is the
/// opaque method label reported by the extractor (an encoding name for
/// plain text, "tesseract"/"embedded" for PDFs).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub file: String,
    pub legibility: f64,
    pub extraction: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DocumentRecord {
    pub fn new(file: String, legibility: f64, extraction: String) -> Self {
        Self {
            file,
            legibility,
            extraction,
            error: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_implies_countable() {
        for result in [
            ClassificationResult::EXCLUDED,
            ClassificationResult::FOUND,
            ClassificationResult::CORRECT,
        ] {
            assert!(!result.valid || result.countable);
        }
    }

    #[test]
    fn record_without_error_serializes_three_fields() {
        let record = DocumentRecord::new("a.txt".to_string(), 0.5, "utf-8".to_string());
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("error"));
        assert!(json.contains("\"file\""));
        assert!(json.contains("\"legibility\""));
        assert!(json.contains("\"extraction\""));
    }
}
