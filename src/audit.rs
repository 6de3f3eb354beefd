//! Read-only post-tokenization audit.
//!
//! `sentence_in_dictionary` never mutates a [`Sentence`]; it only reports
//! which committed alternatives have no dictionary backing, so a caller can
//! decide what to do about unknown words (log them, surface a warning, feed
//! them to a different pipeline stage) without re-running the separator.

use crate::dict::Dictionary;
use crate::token::{Sentence, EMPTY_WORD_MARK};

/// One position with none of its alternatives found in the dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPosition {
    pub index: usize,
    pub alternatives: Vec<String>,
}

/// Walk every position in `sentence` and report those whose alternatives are
/// all unknown to `dict` (ignoring [`EMPTY_WORD_MARK`] filler).
pub fn sentence_in_dictionary(sentence: &Sentence, dict: &dyn Dictionary) -> Vec<UnknownPosition> {
    let mut report = Vec::new();
    for (index, position) in sentence.positions().iter().enumerate() {
        let alts: Vec<&str> = position.alternatives.iter().map(|&id| sentence.resolve(id)).collect();
        let known = alts.iter().any(|&a| a == EMPTY_WORD_MARK || dict.find(strip_markers(a)));
        if !known {
            report.push(UnknownPosition { index, alternatives: alts.into_iter().map(str::to_string).collect() });
        }
    }
    report
}

/// Strip the trailing spell-guess/regex-must-resolve markers before a
/// dictionary lookup, so an audit doesn't flag an alternative as unknown
/// purely because of its decoration.
fn strip_markers(s: &str) -> &str {
    s.strip_suffix(crate::token::SPELL_GUESS_MARK)
        .or_else(|| s.strip_suffix(crate::token::REGEX_MARK))
        .unwrap_or(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::affix::AffixTable;
    use crate::dict::MemDictionary;
    use crate::options::TokenizerOptions;

    #[test]
    fn flags_positions_with_no_known_alternative() {
        let dict = MemDictionary::new().with_words(["cat"]);
        let affix = AffixTable::builder().build().unwrap();
        let opts = TokenizerOptions::new();
        let (sentence, _) = crate::driver::tokenize("cat zzqx", &dict, &affix, None, &opts).unwrap();

        let report = sentence_in_dictionary(&sentence, &dict);
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].alternatives, vec!["zzqx"]);
    }

    #[test]
    fn spell_guess_marker_is_stripped_before_lookup() {
        let dict = MemDictionary::new().with_words(["cat"]);
        let report = sentence_in_dictionary(&{
            let mut s = Sentence::new();
            s.issue_sentence_word("cat[~]", false);
            s
        }, &dict);
        assert!(report.is_empty());
    }
}
