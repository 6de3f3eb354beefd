//! A dictionary-driven word tokenizer for grammar parsers: turns one
//! already-segmented sentence into a positional matrix of alternative
//! tokenizations (prefix/stem/suffix splits, punctuation separation, regex
//! matches, spellcheck guesses, case variants).
//!
//! ```rust
//! use morphtok::{tokenize, AffixTable, MemDictionary, TokenizerOptions};
//!
//! let dict = MemDictionary::new().with_words(["you", "this", "is", "a", "test"]);
//! let affix = AffixTable::builder().suf(["'ve"]).build().unwrap();
//! let opts = TokenizerOptions::new();
//!
//! let (sentence, has_content) = tokenize("you've tested this", &dict, &affix, None, &opts).unwrap();
//! assert!(has_content);
//! assert_eq!(sentence.alternatives_at(0).collect::<Vec<_>>(), vec!["you"]);
//! assert_eq!(sentence.alternatives_at(1).collect::<Vec<_>>(), vec!["=ve"]);
//! ```

pub mod affix;
pub mod audit;
pub mod charclass;
pub mod dict;
pub mod driver;
pub mod error;
pub mod options;
pub mod separate;
pub mod token;

pub use affix::{AffixTable, AffixTableBuilder, MprefixRule, SufEntry};
pub use audit::{sentence_in_dictionary, UnknownPosition};
pub use dict::{Dictionary, MemDictionary, MemSpellChecker, SpellChecker};
pub use driver::{tokenize, tokenize_bytes};
pub use error::{Result, TokenizeError};
pub use options::{TestFlag, TokenizerOptions};
pub use token::{AltGroup, Sentence, TokenId, WordPosition, INFIX_MARK, SUBSCRIPT_MARK};
