pub mod hunspell;
pub mod wordlist;

pub use hunspell::HunspellLexicon;
pub use wordlist::WordListLexicon;

/// Membership test against a reference vocabulary.
///
/// Implementations load once and are read-only afterwards; the evaluator
/// constructs one and passes it by reference into the classifier, so there
/// is no hidden global dictionary state.
pub trait Lexicon {
    fn contains(&self, form: &str) -> bool;
}
