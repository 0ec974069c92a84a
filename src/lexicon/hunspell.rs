use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use zspell::Dictionary;

use crate::lexicon::Lexicon;

/// Lexicon backed by a Hunspell dictionary pair (`.aff` + `.dic`).
///
/// A missing or malformed dictionary is a fatal configuration error: the
/// scorer must never fall back to treating every token as valid or invalid.
pub struct HunspellLexicon {
    dictionary: Dictionary,
}

impl HunspellLexicon {
    pub fn load(aff_path: &Path, dic_path: &Path) -> Result<Self> {
        let aff_content = fs::read_to_string(aff_path)
            .with_context(|| format!("failed to read affix file {}", aff_path.display()))?;
        let dic_content = fs::read_to_string(dic_path)
            .with_context(|| format!("failed to read dictionary file {}", dic_path.display()))?;

        let dictionary = zspell::builder()
            .config_str(&aff_content)
            .dict_str(&dic_content)
            .build()
            .map_err(|e| anyhow::anyhow!("failed to build Hunspell dictionary: {e}"))?;

        Ok(Self { dictionary })
    }
}

impl Lexicon for HunspellLexicon {
    fn contains(&self, form: &str) -> bool {
        self.dictionary.check_word(form)
    }
}
