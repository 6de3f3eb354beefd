//! C5 — Sentence Driver.
//!
//! Walks a whole line of input, skipping spaces and quotes, emitting wall
//! tokens, and handing each orthographic chunk to [`crate::separate`]. This
//! is the crate's public entry point.

use log::{debug, trace};

use crate::affix::AffixTable;
use crate::charclass::{is_quote, is_space};
use crate::dict::{Dictionary, SpellChecker, LEFT_WALL_WORD, RIGHT_WALL_WORD};
use crate::error::{Result, TokenizeError};
use crate::options::TokenizerOptions;
use crate::separate::separate_word;
use crate::token::Sentence;

/// Tokenize raw bytes, decoding as UTF-8 first (§6: UTF-8 is the only
/// supported encoding). A decode failure aborts with [`TokenizeError::Decode`]
/// rather than reaching [`tokenize`] at all.
pub fn tokenize_bytes(
    input: &[u8],
    dict: &dyn Dictionary,
    affix: &AffixTable,
    spell: Option<&dyn SpellChecker>,
    opts: &TokenizerOptions,
) -> Result<(Sentence, bool)> {
    let text = std::str::from_utf8(input)
        .map_err(|e| TokenizeError::Decode { codeset: "UTF-8".to_string(), detail: e.to_string() })?;
    tokenize(text, dict, affix, spell, opts)
}

/// Tokenize one sentence's worth of input against a dictionary and affix table.
///
/// Returns the built [`Sentence`] and whether it contains at least one
/// non-wall position (or a right wall), matching §4.5's return contract.
pub fn tokenize(
    input: &str,
    dict: &dyn Dictionary,
    affix: &AffixTable,
    spell: Option<&dyn SpellChecker>,
    opts: &TokenizerOptions,
) -> Result<(Sentence, bool)> {
    let mut sentence = Sentence::new();

    if dict.left_wall_defined() {
        sentence.issue_sentence_word(LEFT_WALL_WORD, false);
        debug!("issued left wall");
    }
    let first_word_index = sentence.len();

    let mut quote_found = false;
    let mut chars = input.char_indices().peekable();

    loop {
        // Step 1: skip spaces and quotes, latching quote_found.
        while let Some(&(_, cp)) = chars.peek() {
            if is_space(cp) {
                chars.next();
            } else if is_quote(cp, affix) {
                quote_found = true;
                chars.next();
            } else {
                break;
            }
        }

        // Step 2: end of input.
        let Some(&(start, _)) = chars.peek() else { break };

        // Step 3: scan forward to the next space, quote, or NUL.
        let mut end = start;
        while let Some(&(idx, cp)) = chars.peek() {
            if is_space(cp) || is_quote(cp, affix) || cp == '\0' {
                break;
            }
            end = idx + cp.len_utf8();
            chars.next();
        }

        let chunk = &input[start..end];
        debug!("dispatching chunk {chunk:?} (quote_found={quote_found})");
        if opts.verbosity > 0 {
            trace!("chunk {chunk:?} spans input bytes {start}..{end}");
        }

        // Step 4: invoke C4, then reset the quote latch.
        separate_word(&mut sentence, dict, affix, spell, chunk, quote_found, first_word_index, opts)?;
        quote_found = false;
    }

    let mut has_content = sentence.len() > first_word_index;

    if dict.right_wall_defined() {
        sentence.issue_sentence_word(RIGHT_WALL_WORD, false);
        debug!("issued right wall");
        has_content = true;
    }

    Ok((sentence, has_content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dict::MemDictionary;

    #[test]
    fn simple_sentence() {
        let dict = MemDictionary::new().with_words(["this", "is", "a", "test"]);
        let affix = AffixTable::builder().build().unwrap();
        let opts = TokenizerOptions::new();
        let (sentence, has_content) = tokenize("this is a test", &dict, &affix, None, &opts).unwrap();
        assert!(has_content);
        assert_eq!(sentence.len(), 4);
        let words: Vec<_> = sentence.positions().iter().map(|p| sentence.resolve(p.alternatives[0])).collect();
        assert_eq!(words, vec!["this", "is", "a", "test"]);
    }

    #[test]
    fn walls_are_issued_when_declared() {
        let dict = MemDictionary::new().with_words(["cat"]).with_left_wall(true).with_right_wall(true);
        let affix = AffixTable::builder().build().unwrap();
        let opts = TokenizerOptions::new();
        let (sentence, has_content) = tokenize("cat", &dict, &affix, None, &opts).unwrap();
        assert!(has_content);
        assert_eq!(sentence.len(), 3);
        assert_eq!(sentence.resolve(sentence.positions()[0].alternatives[0]), LEFT_WALL_WORD);
        assert_eq!(sentence.resolve(sentence.positions()[2].alternatives[0]), RIGHT_WALL_WORD);
    }

    #[test]
    fn empty_input_has_no_content_without_walls() {
        let dict = MemDictionary::new();
        let affix = AffixTable::builder().build().unwrap();
        let opts = TokenizerOptions::new();
        let (sentence, has_content) = tokenize("   ", &dict, &affix, None, &opts).unwrap();
        assert!(!has_content);
        assert_eq!(sentence.len(), 0);
    }

    #[test]
    fn tokenize_bytes_rejects_invalid_utf8() {
        let dict = MemDictionary::new();
        let affix = AffixTable::builder().build().unwrap();
        let opts = TokenizerOptions::new();
        let err = tokenize_bytes(&[0xff, 0xfe], &dict, &affix, None, &opts).unwrap_err();
        assert!(matches!(err, crate::error::TokenizeError::Decode { .. }));
    }

    #[test]
    fn tokenize_bytes_accepts_valid_utf8() {
        let dict = MemDictionary::new().with_words(["cat"]);
        let affix = AffixTable::builder().build().unwrap();
        let opts = TokenizerOptions::new();
        let (sentence, has_content) = tokenize_bytes("cat".as_bytes(), &dict, &affix, None, &opts).unwrap();
        assert!(has_content);
        assert_eq!(sentence.len(), 1);
    }

    #[test]
    fn quote_is_latched_onto_next_chunk() {
        let dict = MemDictionary::new().with_words(["50s"]).with_left_wall(true);
        let affix = AffixTable::builder().quotes(["'"]).build().unwrap();
        let opts = TokenizerOptions::new();
        let (sentence, _) = tokenize("'50s", &dict, &affix, None, &opts).unwrap();
        // position 0 is the left wall; position 1 is the quoted word.
        assert!(sentence.positions()[1].post_quote);
    }
}
