//! Data model (§3): the string interner, word positions, and the sentence
//! that owns them. Also the reserved decoration markers (§3 "Token decoration
//! markers") and the balancing algorithm (§4.4) that keeps an emission
//! group's alternative columns equal in depth.

use std::collections::HashMap;

use crate::error::{Result, TokenizeError};

/// Separates stem from affix in a decorated alternative, e.g. `"play"` + `"=ed"`.
pub const INFIX_MARK: char = '=';

/// Separates a base word from its dictionary sense subscript, e.g. `"run.v"`.
pub const SUBSCRIPT_MARK: char = '.';

/// Sentinel filler used to pad short alternatives up to a group's column depth.
/// A bare NUL can never occur in tokenizable input (the sentence driver stops
/// scanning a chunk at the first NUL, §4.5), so it can't collide with a real
/// surface form.
pub const EMPTY_WORD_MARK: &str = "\0";

/// Trailing marker: this alternative came from a spellcheck guess.
pub const SPELL_GUESS_MARK: &str = "[~]";

/// Trailing marker: this alternative must be resolved via regex at the
/// expression-building stage.
pub const REGEX_MARK: &str = "[!]";

/// An interned string id, stable for the lifetime of the owning [`Sentence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenId(u32);

/// A per-sentence string interner.
///
/// Unlike a process-wide interner, this one is owned exclusively by one
/// [`Sentence`] (§5): no synchronization is needed, and ids from two
/// different sentences are not comparable.
#[derive(Debug, Default)]
pub struct Interner {
    strings: Vec<Box<str>>,
    index: HashMap<Box<str>, TokenId>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intern(&mut self, s: &str) -> TokenId {
        if let Some(&id) = self.index.get(s) {
            return id;
        }
        let id = TokenId(self.strings.len() as u32);
        let boxed: Box<str> = s.into();
        self.strings.push(boxed.clone());
        self.index.insert(boxed, id);
        id
    }

    pub fn resolve(&self, id: TokenId) -> &str {
        &self.strings[id.0 as usize]
    }
}

/// One slot in the sentence (§3).
#[derive(Debug, Clone)]
pub struct WordPosition {
    pub alternatives: Vec<TokenId>,
    pub unsplit_word: Option<TokenId>,
    pub firstupper: bool,
    pub post_quote: bool,
}

/// An ordered sequence of word positions plus the string interner backing them.
#[derive(Debug, Default)]
pub struct Sentence {
    positions: Vec<WordPosition>,
    interner: Interner,
}

impl Sentence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[WordPosition] {
        &self.positions
    }

    pub fn resolve(&self, id: TokenId) -> &str {
        self.interner.resolve(id)
    }

    /// Alternative strings at `pos`, resolved to `&str`.
    pub fn alternatives_at(&self, pos: usize) -> impl Iterator<Item = &str> {
        self.positions[pos].alternatives.iter().map(|&id| self.resolve(id))
    }

    /// Commit a single position with one alternative (§4.4 Stage 12 fallback,
    /// Stage 13 trailing-strip emission, and C5's wall emission).
    pub fn issue_sentence_word(&mut self, word: &str, post_quote: bool) {
        let id = self.interner.intern(word);
        let firstupper = word.chars().next().is_some_and(char::is_uppercase);
        self.positions.push(WordPosition { alternatives: vec![id], unsplit_word: Some(id), post_quote, firstupper });
    }

    /// Commit a whole (possibly multi-position) emission group built up by
    /// [`AltGroup`], applying the balancing invariant (§4.4) and invariants
    /// 1-5 from §3.
    ///
    /// Re-checks the balancing invariant before committing anything: every
    /// column must carry the same number of alternatives. `AltGroup` is
    /// supposed to guarantee this by construction, so a mismatch here means a
    /// bug in this crate, not malformed input; it is reported as
    /// [`TokenizeError::AssertionViolation`] rather than a `panic!`, so a
    /// caller embedding this crate in a long-running service isn't brought
    /// down by one bad sentence.
    pub fn issue_alternatives(&mut self, group: AltGroup, unsplit_word: &str, post_quote: bool) -> Result<()> {
        if group.is_empty() {
            self.issue_sentence_word(unsplit_word, post_quote);
            return Ok(());
        }
        let depth = group.columns[0].len();
        for (i, column) in group.columns.iter().enumerate() {
            if column.len() != depth {
                return Err(TokenizeError::AssertionViolation { invariant: "balancing", position: self.positions.len() + i });
            }
        }
        let unsplit_id = self.interner.intern(unsplit_word);
        for (i, column) in group.columns.into_iter().enumerate() {
            let ids: Vec<TokenId> = column.iter().map(|s| self.interner.intern(s)).collect();
            let firstupper = column.iter().any(|s| s.chars().next().is_some_and(char::is_uppercase));
            self.positions.push(WordPosition {
                alternatives: ids,
                unsplit_word: if i == 0 { Some(unsplit_id) } else { None },
                post_quote: if i == 0 { post_quote } else { false },
                firstupper,
            });
        }
        Ok(())
    }
}

/// Builds up the alternatives for one emission group before it is committed
/// to the sentence, implementing the balancing algorithm of §4.4.
///
/// Each "row" added is one candidate analysis spanning `row.len()` positions.
/// Rows of different widths are reconciled by padding with
/// [`EMPTY_WORD_MARK`] so every column ends up with equal depth.
#[derive(Debug, Default)]
pub struct AltGroup {
    columns: Vec<Vec<String>>,
}

impl AltGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Add a single-position alternative (e.g. the whole-word candidate, or
    /// a capitalization/regex/spell-guess alternative).
    pub fn add_single(&mut self, token: impl Into<String>) {
        self.add_row(vec![token.into()]);
    }

    /// Add a row spanning `row.len()` positions (a prefix/stem/suffix split,
    /// a multi-prefix chain, or a spell-guess run-on decomposition).
    pub fn add_row(&mut self, row: Vec<String>) {
        let k = row.len();
        debug_assert!(k > 0, "a row must occupy at least one position");
        let depth = self.columns.first().map_or(0, Vec::len);

        if k > self.columns.len() {
            for _ in self.columns.len()..k {
                self.columns.push(vec![EMPTY_WORD_MARK.to_string(); depth]);
            }
        }

        for (i, column) in self.columns.iter_mut().enumerate() {
            if i < k {
                column.push(row[i].clone());
            } else {
                column.push(EMPTY_WORD_MARK.to_string());
            }
        }
    }
}
