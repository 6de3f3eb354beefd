use proptest::prelude::*;

use morphtok::token::EMPTY_WORD_MARK;
use morphtok::{tokenize, AffixTable, MemDictionary, TokenizerOptions};

fn plain_word() -> impl Strategy<Value = String> {
    "[a-z]{1,8}".prop_filter("must not collide with markers", |s| !s.is_empty())
}

proptest! {
    #[test]
    fn balancing_invariant_holds(words in proptest::collection::vec(plain_word(), 1..6)) {
        let sentence_text = words.join(" ");
        let dict = MemDictionary::new().with_words(words.iter().cloned());
        let affix = AffixTable::builder().build().unwrap();
        let opts = TokenizerOptions::new();

        let (sentence, _) = tokenize(&sentence_text, &dict, &affix, None, &opts).unwrap();

        // with no affixes configured, every chunk should land as its own
        // single-alternative position; alternative strings are non-empty.
        for position in sentence.positions() {
            prop_assert!(!position.alternatives.is_empty());
            for &id in &position.alternatives {
                prop_assert!(!sentence.resolve(id).is_empty());
            }
        }
    }

    #[test]
    fn no_punctuation_one_position_per_chunk(words in proptest::collection::vec(plain_word(), 1..6)) {
        let sentence_text = words.join(" ");
        // empty dictionary: no split, no regex, no spellcheck -> unknown-word
        // fallback, exactly one alternative per position equal to the chunk.
        let dict = MemDictionary::new();
        let affix = AffixTable::builder().build().unwrap();
        let opts = TokenizerOptions::new();

        let (sentence, _) = tokenize(&sentence_text, &dict, &affix, None, &opts).unwrap();

        prop_assert_eq!(sentence.len(), words.len());
        for (position, word) in sentence.positions().iter().zip(words.iter()) {
            prop_assert_eq!(position.alternatives.len(), 1);
            prop_assert_eq!(sentence.resolve(position.alternatives[0]), word.as_str());
        }
    }

    #[test]
    fn unsplit_word_set_exactly_once_per_group(word in plain_word(), suffix in "[a-z]{1,4}") {
        let stem = word.clone();
        let whole = format!("{stem}{suffix}");
        let dict = MemDictionary::new().with_words([stem.clone()]);
        let affix = AffixTable::builder().suf([suffix.clone()]).build().unwrap();
        let opts = TokenizerOptions::new();

        let (sentence, _) = tokenize(&whole, &dict, &affix, None, &opts).unwrap();

        let unsplit_count = sentence.positions().iter().filter(|p| p.unsplit_word.is_some()).count();
        prop_assert_eq!(unsplit_count, 1);
    }

    #[test]
    fn empty_word_mark_never_appears_as_a_real_alternative_surface(words in proptest::collection::vec(plain_word(), 1..4)) {
        let sentence_text = words.join(" ");
        let dict = MemDictionary::new().with_words(words.iter().cloned());
        let affix = AffixTable::builder().build().unwrap();
        let opts = TokenizerOptions::new();

        let (sentence, _) = tokenize(&sentence_text, &dict, &affix, None, &opts).unwrap();

        for position in sentence.positions() {
            // a position backed by a real word should not itself be the filler.
            if position.unsplit_word.is_some() {
                let surface = sentence.resolve(position.alternatives[0]);
                prop_assert_ne!(surface, EMPTY_WORD_MARK);
            }
        }
    }
}
