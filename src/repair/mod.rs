//! Pre-scoring cleanup of OCR artifacts.
//!
//! Deterministic substitution pipeline: ligature folding, de-hyphenation,
//! quote normalization, boilerplate and bracket stripping, whitespace
//! collapse. Not guaranteed idempotent — whitespace collapse interacts with
//! the earlier substitutions — but two runs over the same input always
//! produce the same output.

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Corpus-specific knobs for the repair pass.
#[derive(Debug, Clone, Default)]
pub struct RepairConfig {
    /// Literal running-header/footer title to strip together with its
    /// surrounding pagination clutter, e.g.
    /// "The Statutes at Large of Pennsylvania". None disables the step.
    pub boilerplate_title: Option<String>,
}

pub struct Repairer {
    hyphen_break: Regex,
    boilerplate: Option<Regex>,
    bracketed: Regex,
    whitespace_run: Regex,
}

impl Repairer {
    pub fn new(config: &RepairConfig) -> Self {
        // "word-char, optional space, hyphen, optional space, word-char";
        // also merges legitimately hyphenated compounds — known limitation.
        let hyphen_break = Regex::new(r"(\w)\s*-\s*(\w)").expect("hyphen pattern is valid");

        // e.g. "752 The Statutes at Large of Pennsylvania. [1808"
        let boilerplate = config.boilerplate_title.as_deref().map(|title| {
            let pattern = format!(r"[(){{}}\s\d\[\]\.]+{}[(){{}}\s\d\[\]\.]+", regex::escape(title));
            Regex::new(&pattern).expect("boilerplate pattern is valid")
        });

        // short spans only, so long legitimate parentheticals survive
        let bracketed = Regex::new(r"[\[{(][^)}\]]{1,20}[)\]}]").expect("bracket pattern is valid");

        let whitespace_run = Regex::new(r"\s+").expect("whitespace pattern is valid");

        Self {
            hyphen_break,
            boilerplate,
            bracketed,
            whitespace_run,
        }
    }

    pub fn repair(&self, text: &str) -> String {
        // NFKC folds ligature glyphs (ﬁ ﬂ ﬀ) and the archaic long s (ſ)
        // before any pattern matching sees the text.
        let text: String = text.nfkc().collect();

        let text = self.hyphen_break.replace_all(&text, "${1}${2}");
        let text = text.replace('\u{201C}', "\"").replace('\u{201D}', "\"");

        let text = match &self.boilerplate {
            Some(pattern) => pattern.replace_all(&text, " ").into_owned(),
            None => text,
        };

        let text = self.bracketed.replace_all(&text, " ");
        let text = self.whitespace_run.replace_all(&text, " ");
        text.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repairer() -> Repairer {
        Repairer::new(&RepairConfig::default())
    }

    #[test]
    fn repair_is_deterministic() {
        let input = "coun- try [Section I.] “quoted”\n\nnext";
        let repairer = repairer();
        assert_eq!(repairer.repair(input), repairer.repair(input));
    }

    #[test]
    fn rejoins_hyphen_broken_words() {
        let out = repairer().repair("coun- try");
        assert!(out.contains("country"));

        let out = repairer().repair("estab-\nlished");
        assert!(out.contains("established"));
    }

    #[test]
    fn normalizes_curly_quotes() {
        assert_eq!(repairer().repair("“quoted”"), "\"quoted\"");
    }

    #[test]
    fn strips_short_bracketed_annotations() {
        let out = repairer().repair("the king [Section I.] decreed");
        assert_eq!(out, "the king decreed");

        let out = repairer().repair("tax (Section II, P. L.) levied");
        assert_eq!(out, "tax levied");
    }

    #[test]
    fn keeps_long_parenthetical_text() {
        let input = "a (considerably longer parenthetical remark that survives) b";
        let out = repairer().repair(input);
        assert!(out.contains("considerably longer parenthetical remark"));
    }

    #[test]
    fn strips_configured_boilerplate_header() {
        let config = RepairConfig {
            boilerplate_title: Some("The Statutes at Large of Pennsylvania".to_string()),
        };
        let repairer = Repairer::new(&config);
        let out = repairer.repair("levied 752 The Statutes at Large of Pennsylvania. [1808 upon");
        assert_eq!(out, "levied upon");
    }

    #[test]
    fn collapses_whitespace_runs_and_trims() {
        assert_eq!(repairer().repair("  a\n\n b\tc  "), "a b c");
    }

    #[test]
    fn folds_ligatures_and_long_s() {
        let out = repairer().repair("oﬃce eſtabliſh");
        assert_eq!(out, "office establish");
    }
}
