//! Token classification policy.
//!
//! Shapes and their treatment:
//! - length ≤ 1: excluded outright, single characters carry no signal;
//! - leading digit: counted and unconditionally valid (OCR rarely turns a
//!   digit into another digit in a detectable way);
//! - ALL-CAPS alphabetic run: counted, then lower-cased and checked against
//!   the lexicon like any other word;
//! - one letter followed by lower-case letters: counted, validity decided by
//!   the normalizer's candidates against the lexicon;
//! - anything else (letter-digit mixes, underscores, mixed-case noise):
//!   excluded from the denominator entirely.

use crate::core::model::ClassificationResult;
use crate::lexicon::Lexicon;
use crate::score::normalize;

pub struct TokenClassifier<'a> {
    lexicon: &'a dyn Lexicon,
}

impl<'a> TokenClassifier<'a> {
    pub fn new(lexicon: &'a dyn Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn classify(&self, token: &str) -> ClassificationResult {
        if token.chars().count() <= 1 {
            return ClassificationResult::EXCLUDED;
        }

        if token.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            return ClassificationResult::CORRECT;
        }

        if is_upper_case_run(token) || is_word_shape(token) {
            if self.is_known(token) {
                return ClassificationResult::CORRECT;
            }
            return ClassificationResult::FOUND;
        }

        ClassificationResult::EXCLUDED
    }

    /// First normalizer candidate found in the lexicon wins.
    fn is_known(&self, token: &str) -> bool {
        normalize::candidates(token)
            .iter()
            .any(|form| self.lexicon.contains(form))
    }
}

/// Entirely upper-case alphabetic, e.g. an acronym or a shouted heading.
fn is_upper_case_run(token: &str) -> bool {
    token.chars().all(|c| c.is_alphabetic() && c.is_uppercase())
}

/// One letter (any case) followed by one or more lower-case letters:
/// the shape of an ordinary capitalized or lower-case word.
fn is_word_shape(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() => {}
        _ => return false,
    }
    let mut rest_seen = false;
    for c in chars {
        if !(c.is_alphabetic() && c.is_lowercase()) {
            return false;
        }
        rest_seen = true;
    }
    rest_seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::WordListLexicon;

    fn classifier_fixture() -> WordListLexicon {
        WordListLexicon::from_words(["the", "king", "country", "pennsylvania", "enact", "nato"])
    }

    #[test]
    fn single_characters_never_count() {
        let lexicon = classifier_fixture();
        let classifier = TokenClassifier::new(&lexicon);
        assert_eq!(classifier.classify("a"), ClassificationResult::EXCLUDED);
        assert_eq!(classifier.classify("7"), ClassificationResult::EXCLUDED);
    }

    #[test]
    fn digit_led_tokens_are_always_valid() {
        let lexicon = classifier_fixture();
        let classifier = TokenClassifier::new(&lexicon);
        assert_eq!(classifier.classify("1808"), ClassificationResult::CORRECT);
        assert_eq!(classifier.classify("123abc"), ClassificationResult::CORRECT);
    }

    #[test]
    fn dictionary_words_are_correct() {
        let lexicon = classifier_fixture();
        let classifier = TokenClassifier::new(&lexicon);
        assert_eq!(classifier.classify("king"), ClassificationResult::CORRECT);
        assert_eq!(classifier.classify("King"), ClassificationResult::CORRECT);
    }

    #[test]
    fn long_s_fallback_resolves_pennfylvania() {
        let lexicon = classifier_fixture();
        let classifier = TokenClassifier::new(&lexicon);
        assert_eq!(
            classifier.classify("Pennfylvania"),
            ClassificationResult::CORRECT
        );
    }

    #[test]
    fn suffix_fallback_resolves_enacted() {
        let lexicon = classifier_fixture();
        let classifier = TokenClassifier::new(&lexicon);
        assert_eq!(classifier.classify("enacted"), ClassificationResult::CORRECT);
    }

    #[test]
    fn garbage_word_shape_is_found_but_invalid() {
        let lexicon = classifier_fixture();
        let classifier = TokenClassifier::new(&lexicon);
        assert_eq!(classifier.classify("xqzwk"), ClassificationResult::FOUND);
    }

    #[test]
    fn all_caps_run_is_counted_and_checked_lower_cased() {
        let lexicon = classifier_fixture();
        let classifier = TokenClassifier::new(&lexicon);
        assert_eq!(classifier.classify("NATO"), ClassificationResult::CORRECT);
        assert_eq!(classifier.classify("QZXWV"), ClassificationResult::FOUND);
    }

    #[test]
    fn other_shapes_are_excluded_from_the_denominator() {
        let lexicon = classifier_fixture();
        let classifier = TokenClassifier::new(&lexicon);
        assert_eq!(classifier.classify("Th3"), ClassificationResult::EXCLUDED);
        assert_eq!(classifier.classify("xqzwk123"), ClassificationResult::EXCLUDED);
        assert_eq!(classifier.classify("foo_bar"), ClassificationResult::EXCLUDED);
        assert_eq!(classifier.classify("McRae"), ClassificationResult::EXCLUDED);
    }
}
