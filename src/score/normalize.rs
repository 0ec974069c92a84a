//! Candidate forms for dictionary lookup.
//!
//! OCR of archaic typography renders the long s (`ſ`) as `f`, and older
//! scans confuse `z`/`s` ("Pennfylvania", "eftablifh"). The normalizer
//! enumerates repaired candidates in a fixed priority order; the classifier
//! stops at the first lexicon hit. Cheap typographic rewrites come before
//! the more aggressive morphological strips to keep false positives down.

/// Enumerate lookup candidates for a raw token, most specific first:
/// 1. the token lower-cased (ALL-CAPS folds here too);
/// 2. long-s repair: `z`→`s` then `f`→`s` on the lower-cased form;
/// 3. plural strip: trailing `s` removed when the stem keeps length > 1;
/// 4. past-tense strip: trailing `d` removed ("-ise"/"-ize" verbs);
/// 5. past-tense strip: trailing `ed` removed ("enacted" → "enact").
///
/// The morphological strips (3-5) compose over the long-s candidate too,
/// so "raifed" reaches "raise". Always returns at least one candidate;
/// rules that do not apply are skipped rather than emitted as duplicates.
pub fn candidates(token: &str) -> Vec<String> {
    let lower = token.to_lowercase();
    let mut forms = vec![lower.clone()];

    let long_s = lower.replace('z', "s").replace('f', "s");
    if long_s != lower {
        forms.push(long_s);
    }

    let bases: Vec<String> = forms.clone();

    for base in &bases {
        if let Some(stem) = base.strip_suffix('s') {
            if stem.chars().count() > 1 {
                push_unique(&mut forms, stem.to_string());
            }
        }
    }

    for base in &bases {
        if base.ends_with("ed") {
            push_unique(&mut forms, base[..base.len() - 1].to_string());
            push_unique(&mut forms, base[..base.len() - 2].to_string());
        }
    }

    forms
}

fn push_unique(forms: &mut Vec<String>, form: String) {
    if !forms.contains(&form) {
        forms.push(form);
    }
}
