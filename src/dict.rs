//! C3 — Dictionary Oracle.
//!
//! Dictionary *loading* is out of scope for this crate (§1); callers provide
//! an implementation of [`Dictionary`] backed by whatever storage they like.
//! What this crate owns is the *contract* between the oracle and the word
//! separator: the regex-versus-exact-lookup discipline in §4.3 is load-bearing,
//! so it's expressed as two distinct trait methods rather than one.

/// Read-only probe into a word list, with an optional regex-backed fallback.
///
/// Implementors must keep `exact_lookup` and `find`/`match_regex` consistent:
/// `find(s)` must be `true` whenever `exact_lookup(s)` is, and whenever a named
/// regex matches `s` and that regex's name is itself a dictionary entry.
pub trait Dictionary: Send + Sync {
    /// Is `s` literally a dictionary entry, ignoring any regex-backed entries?
    fn exact_lookup(&self, s: &str) -> bool;

    /// `exact_lookup(s)` or a named regex matches `s` and its name is an entry.
    fn find(&self, s: &str) -> bool {
        self.exact_lookup(s) || self.match_regex(s).is_some()
    }

    /// The name of the first regex entry matching `s`, if any.
    fn match_regex(&self, s: &str) -> Option<String>;

    /// Does the dictionary entry for `s` carry `marker` among its features?
    /// Used for entity markers; defaults to `false` for dictionaries that
    /// don't model feature markers at all.
    fn word_contains(&self, _s: &str, _marker: &str) -> bool {
        false
    }

    fn left_wall_defined(&self) -> bool {
        false
    }

    fn right_wall_defined(&self) -> bool {
        false
    }

    fn unknown_word_defined(&self) -> bool {
        false
    }

    fn use_unknown_word(&self) -> bool {
        false
    }
}

/// Synthetic sentence-boundary token text.
pub const LEFT_WALL_WORD: &str = "LEFT-WALL";
pub const RIGHT_WALL_WORD: &str = "RIGHT-WALL";
pub const UNKNOWN_WORD: &str = "UNKNOWN-WORD";

/// Synchronous spellcheck facade (§6). Implementations may block; the
/// tokenizer exposes no cancellation point (§5).
pub trait SpellChecker: Send + Sync {
    /// Is `word` spelled correctly (or otherwise not worth correcting)?
    fn test(&self, word: &str) -> bool;

    /// Up to some bounded number of suggested corrections for `word`.
    /// Suggestions may contain an internal space, meaning a run-on split.
    fn suggest(&self, word: &str) -> Vec<String>;
}

/// A simple in-memory dictionary, for tests and small embedded lexicons.
///
/// Regex entries are matched in insertion order; the first match wins, same
/// as the spec's C3 contract (§4.3).
#[derive(Debug, Default, Clone)]
pub struct MemDictionary {
    words: std::collections::HashSet<String>,
    regexes: Vec<(String, fancy_regex::Regex)>,
    left_wall: bool,
    right_wall: bool,
    unknown_word: bool,
    use_unknown: bool,
}

impl MemDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words.extend(words.into_iter().map(Into::into));
        self
    }

    /// Register a named regex entry. `name` must also be a word in this
    /// dictionary for `find` to accept matches against it (§4.3): callers
    /// typically pass the same string as both the regex name and a word.
    pub fn with_regex(mut self, name: impl Into<String>, pattern: &str) -> Self {
        let name = name.into();
        let re = fancy_regex::Regex::new(pattern).expect("static regex pattern must compile");
        self.regexes.push((name, re));
        self
    }

    pub fn with_left_wall(mut self, defined: bool) -> Self {
        self.left_wall = defined;
        self
    }

    pub fn with_right_wall(mut self, defined: bool) -> Self {
        self.right_wall = defined;
        self
    }

    pub fn with_unknown_word(mut self, defined: bool, used: bool) -> Self {
        self.unknown_word = defined;
        self.use_unknown = used;
        self
    }
}

impl Dictionary for MemDictionary {
    fn exact_lookup(&self, s: &str) -> bool {
        self.words.contains(s)
    }

    fn match_regex(&self, s: &str) -> Option<String> {
        self.regexes
            .iter()
            .find(|(name, re)| re.is_match(s).unwrap_or(false) && self.words.contains(name.as_str()))
            .map(|(name, _)| name.clone())
    }

    fn left_wall_defined(&self) -> bool {
        self.left_wall
    }

    fn right_wall_defined(&self) -> bool {
        self.right_wall
    }

    fn unknown_word_defined(&self) -> bool {
        self.unknown_word
    }

    fn use_unknown_word(&self) -> bool {
        self.use_unknown
    }
}

/// A spellchecker stub driven by a fixed suggestion table, for tests.
#[derive(Debug, Default, Clone)]
pub struct MemSpellChecker {
    suggestions: std::collections::HashMap<String, Vec<String>>,
}

impl MemSpellChecker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_suggestion(mut self, word: impl Into<String>, suggestions: Vec<String>) -> Self {
        self.suggestions.insert(word.into(), suggestions);
        self
    }
}

impl SpellChecker for MemSpellChecker {
    fn test(&self, word: &str) -> bool {
        !self.suggestions.contains_key(word)
    }

    fn suggest(&self, word: &str) -> Vec<String> {
        self.suggestions.get(word).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_lookup_and_find() {
        let dict = MemDictionary::new().with_words(["cat", "1960"]).with_regex("1960", r"^\d{4}$");
        assert!(dict.exact_lookup("cat"));
        assert!(!dict.exact_lookup("1999"));
        assert!(dict.find("1999"));
        assert_eq!(dict.match_regex("1999"), Some("1960".to_string()));
    }

    #[test]
    fn regex_name_must_be_dictionary_entry() {
        let dict = MemDictionary::new().with_regex("orphan-regex", r"^\d+$");
        assert!(!dict.find("123"));
    }
}
