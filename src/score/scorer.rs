use regex::Regex;

use crate::lexicon::Lexicon;
use crate::score::classify::TokenClassifier;

/// Aggregates per-token verdicts into one document-level ratio.
pub struct LegibilityScorer {
    token_pattern: Regex,
}

impl LegibilityScorer {
    pub fn new() -> Self {
        // maximal runs of word characters, one left-to-right scan
        let token_pattern = Regex::new(r"\w+").expect("token pattern is valid");
        Self { token_pattern }
    }

    /// Ratio of valid to countable tokens, truncated to 3 decimals.
    /// A text with no countable tokens scores 0.0 by definition.
    pub fn score(&self, text: &str, lexicon: &dyn Lexicon) -> f64 {
        let classifier = TokenClassifier::new(lexicon);

        let mut found = 0u64;
        let mut correct = 0u64;
        for token in self.token_pattern.find_iter(text) {
            let result = classifier.classify(token.as_str());
            if result.countable {
                found += 1;
            }
            if result.valid {
                correct += 1;
            }
        }

        if found == 0 {
            return 0.0;
        }
        truncate_3(correct as f64 / found as f64)
    }
}

impl Default for LegibilityScorer {
    fn default() -> Self {
        Self::new()
    }
}

/// Floor truncation, not round-to-nearest: 0.4567 reports as 0.456.
/// Output stability across runs depends on this exact behavior.
pub fn truncate_3(ratio: f64) -> f64 {
    (ratio * 1000.0).floor() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::WordListLexicon;

    fn lexicon_fixture() -> WordListLexicon {
        WordListLexicon::from_words(["the", "king", "decreed", "country"])
    }

    #[test]
    fn empty_and_blank_texts_score_zero() {
        let lexicon = lexicon_fixture();
        let scorer = LegibilityScorer::new();
        assert_eq!(scorer.score("", &lexicon), 0.0);
        assert_eq!(scorer.score("   ", &lexicon), 0.0);
        assert_eq!(scorer.score("... !!! ---", &lexicon), 0.0);
    }

    #[test]
    fn pure_digit_tokens_score_one() {
        let lexicon = lexicon_fixture();
        let scorer = LegibilityScorer::new();
        assert_eq!(scorer.score("123 456", &lexicon), 1.0);
    }

    #[test]
    fn single_characters_do_not_change_the_score() {
        let lexicon = lexicon_fixture();
        let scorer = LegibilityScorer::new();
        assert_eq!(
            scorer.score("a b the", &lexicon),
            scorer.score("the", &lexicon)
        );
    }

    #[test]
    fn ratio_is_truncated_not_rounded() {
        assert_eq!(truncate_3(0.4567), 0.456);
        assert_eq!(truncate_3(0.9999), 0.999);
        assert_eq!(truncate_3(1.0), 1.0);
        assert_eq!(truncate_3(0.0), 0.0);

        // 2 of 3 countable tokens valid: 0.666..., floor keeps 0.666
        let lexicon = lexicon_fixture();
        let scorer = LegibilityScorer::new();
        assert_eq!(scorer.score("the king xqzwk", &lexicon), 0.666);
    }

    #[test]
    fn mixed_garbage_lowers_the_ratio() {
        let lexicon = lexicon_fixture();
        let scorer = LegibilityScorer::new();
        // countable: the, king, xqzwk, qwpfg (2 valid of 4); Th3 and x9 excluded
        let score = scorer.score("the king xqzwk qwpfg Th3 x9", &lexicon);
        assert_eq!(score, 0.5);
    }
}
