use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};

use crate::extract::{Extraction, Extractor};

/// How to get text out of a PDF.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PdfMode {
    /// Rasterize and OCR through an external tesseract-style bridge.
    Ocr,
    /// Pull the embedded text layer with pdftotext.
    Embedded,
}

impl PdfMode {
    fn label(self) -> &'static str {
        match self {
            PdfMode::Ocr => "tesseract",
            PdfMode::Embedded => "embedded",
        }
    }
}

/// PDF extraction via an external command, in the spirit of the OCR bridge:
/// the slow, platform-specific work stays outside the process and this side
/// only consumes its stdout.
#[derive(Debug, Clone)]
pub struct PdfExtractor {
    mode: PdfMode,
    ocr_command: PathBuf,
}

impl PdfExtractor {
    pub fn new(mode: PdfMode) -> Self {
        Self {
            mode,
            ocr_command: PathBuf::from("ocr-bridge"),
        }
    }

    /// Override the OCR bridge executable (tests, alternate engines).
    pub fn with_ocr_command(mut self, command: PathBuf) -> Self {
        self.ocr_command = command;
        self
    }

    fn run(&self, path: &Path) -> Result<Vec<u8>> {
        let output = match self.mode {
            PdfMode::Ocr => Command::new(&self.ocr_command)
                .arg("--lang")
                .arg("eng")
                .arg(path)
                .output()
                .with_context(|| {
                    format!("failed to invoke {} on {}", self.ocr_command.display(), path.display())
                })?,
            PdfMode::Embedded => Command::new("pdftotext")
                .arg(path)
                .arg("-")
                .output()
                .with_context(|| format!("failed to invoke pdftotext on {}", path.display()))?,
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("pdf extraction failed with {}: {stderr}", output.status);
        }
        Ok(output.stdout)
    }
}

impl Extractor for PdfExtractor {
    fn extract(&self, path: &Path) -> Result<Extraction> {
        let stdout = self.run(path)?;

        // A decode failure becomes literal error text rather than an Err:
        // the scorer then reports a near-zero ratio for the document instead
        // of dropping it from the batch. The evaluator flags the sentinel.
        let text = match String::from_utf8(stdout) {
            Ok(text) => text,
            Err(e) => format!("ERROR: {e}"),
        };

        Ok(Extraction {
            text,
            method: self.mode.label().to_string(),
        })
    }
}

/// The collaborator's error sentinel, preserved for compatibility.
pub fn is_error_sentinel(text: &str) -> bool {
    text.starts_with("ERROR: ")
}
