use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::lexicon::Lexicon;

/// Lexicon backed by a plain word list: one form per line, blank lines and
/// `#` comments skipped. Forms are stored lower-cased so lookups match the
/// normalizer's lower-cased candidates.
#[derive(Debug, Clone)]
pub struct WordListLexicon {
    words: HashSet<String>,
}

impl WordListLexicon {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read word list {}", path.display()))?;
        if content.trim().is_empty() {
            anyhow::bail!("word list {} is empty", path.display());
        }
        Ok(Self::from_words(content.lines()))
    }

    pub fn from_words<'a, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let words = words
            .into_iter()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_lowercase)
            .collect();
        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Lexicon for WordListLexicon {
    fn contains(&self, form: &str) -> bool {
        self.words.contains(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_comments_and_blank_lines() {
        let lexicon = WordListLexicon::from_words(["# header", "", "the", "King "]);
        assert_eq!(lexicon.len(), 2);
        assert!(lexicon.contains("the"));
        assert!(lexicon.contains("king"));
        assert!(!lexicon.contains("# header"));
    }

    #[test]
    fn lookups_are_lower_case_only() {
        let lexicon = WordListLexicon::from_words(["Pennsylvania"]);
        assert!(lexicon.contains("pennsylvania"));
        assert!(!lexicon.contains("Pennsylvania"));
    }
}
