use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::core::model::DocumentRecord;
use crate::extract::pdf::is_error_sentinel;
use crate::extract::ExtractorSet;
use crate::lexicon::Lexicon;
use crate::repair::{RepairConfig, Repairer};
use crate::score::scorer::LegibilityScorer;

#[derive(Debug, Clone)]
pub struct EvalConfig {
    /// Folder of input documents.
    pub input: PathBuf,
    /// Run the OCR repair pass before scoring.
    pub repair: bool,
    pub repair_config: RepairConfig,
    /// Save each file's extracted text here for inspection.
    pub save_dir: Option<PathBuf>,
}

impl EvalConfig {
    pub fn new(input: PathBuf) -> Self {
        Self {
            input,
            repair: false,
            repair_config: RepairConfig::default(),
            save_dir: None,
        }
    }
}

/// Score every recognized file in the input folder, sorted by name so the
/// output batch is deterministic. Files without a registered extractor are
/// skipped, not errors. Extracted text is dropped as soon as the file is
/// scored to keep memory flat over large corpora.
pub fn evaluate_folder(
    config: &EvalConfig,
    lexicon: &dyn Lexicon,
    extractors: &ExtractorSet,
) -> Result<Vec<DocumentRecord>> {
    let mut paths: Vec<PathBuf> = fs::read_dir(&config.input)
        .with_context(|| format!("failed to read input folder {}", config.input.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    paths.sort_by_key(|path| path.file_name().map(|n| n.to_os_string()));

    let repairer = Repairer::new(&config.repair_config);
    let scorer = LegibilityScorer::new();

    let mut records = Vec::new();
    for path in paths {
        if let Some(record) =
            evaluate_file(&path, config, lexicon, extractors, &repairer, &scorer)?
        {
            records.push(record);
        }
    }
    Ok(records)
}

fn evaluate_file(
    path: &Path,
    config: &EvalConfig,
    lexicon: &dyn Lexicon,
    extractors: &ExtractorSet,
    repairer: &Repairer,
    scorer: &LegibilityScorer,
) -> Result<Option<DocumentRecord>> {
    let Some(extractor) = extractors.for_path(path) else {
        debug!(file = %path.display(), "no extractor for extension, skipping");
        return Ok(None);
    };

    let extraction = extractor.extract(path)?;

    if let Some(save_dir) = &config.save_dir {
        save_extracted_text(save_dir, path, &extraction.text)?;
    }

    let text = if config.repair {
        repairer.repair(&extraction.text)
    } else {
        extraction.text
    };

    let legibility = scorer.score(&text, lexicon);

    let mut record = DocumentRecord::new(
        path.to_string_lossy().into_owned(),
        legibility,
        extraction.method,
    );

    // Sentinel text was scored as literal content above; surface it too.
    if is_error_sentinel(&text) {
        warn!(file = %path.display(), "extraction produced an error sentinel");
        record.error = Some(text.lines().next().unwrap_or("ERROR:").to_string());
    }

    Ok(Some(record))
}

fn save_extracted_text(save_dir: &Path, source: &Path, text: &str) -> Result<()> {
    fs::create_dir_all(save_dir)
        .with_context(|| format!("failed to create save folder {}", save_dir.display()))?;
    let name = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "unnamed".to_string());
    let out_path = save_dir.join(format!("{name}.txt"));
    fs::write(&out_path, text)
        .with_context(|| format!("failed to save extracted text to {}", out_path.display()))?;
    Ok(())
}
