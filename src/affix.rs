//! C2 — Affix Table Accessor.
//!
//! An immutable, read-only view over the affix classes the word separator
//! consults. Construction validates the table's own limits and deduplicates
//! its class lists; tokenization never mutates it.

use std::collections::HashSet;

use crate::error::{Result, TokenizeError};

/// Maximum number of entries allowed in the `MPRE` (multi-prefix) class.
pub const MAX_MPRE_ENTRIES: usize = 16;

/// A single `MPRE` subword plus its declarative chaining policy.
///
/// `chain_initial_only` re-expresses what the original Hebrew-specific logic
/// hard-coded for the subword `"ו"`: it may only appear as the first element
/// of a prefix chain. The reject/collapse behavior built on top of this flag
/// lives in [`crate::separate`], applied generically to whichever subwords
/// are flagged here (see DESIGN.md).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MprefixRule {
    pub subword: String,
    pub chain_initial_only: bool,
}

impl MprefixRule {
    pub fn new(subword: impl Into<String>) -> Self {
        Self { subword: subword.into(), chain_initial_only: false }
    }

    pub fn chain_initial(subword: impl Into<String>) -> Self {
        Self { subword: subword.into(), chain_initial_only: true }
    }
}

/// A single `SUF` entry plus its declarative decoration policy.
///
/// Most suffixes are stored with [`crate::token::INFIX_MARK`] prepended (and
/// a leading apostrophe, if any, dropped in favor of the mark). A handful of
/// entries — the possessive `"'s"` being the textbook example — are instead
/// stored exactly as written. `store_verbatim` carries that distinction as
/// data on the entry, the same way `chain_initial_only` carries Hebrew's
/// prefix-chaining policy on `MprefixRule`, rather than guessing it from the
/// suffix's first code point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SufEntry {
    pub text: String,
    pub store_verbatim: bool,
}

impl SufEntry {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), store_verbatim: false }
    }

    pub fn verbatim(text: impl Into<String>) -> Self {
        Self { text: text.into(), store_verbatim: true }
    }
}

impl From<&str> for SufEntry {
    fn from(s: &str) -> Self {
        SufEntry::new(s)
    }
}

impl From<String> for SufEntry {
    fn from(s: String) -> Self {
        SufEntry::new(s)
    }
}

/// Immutable affix class table.
#[derive(Debug, Clone, Default)]
pub struct AffixTable {
    lpunc: Vec<String>,
    rpunc: Vec<String>,
    units: Vec<String>,
    pre: Vec<String>,
    suf: Vec<SufEntry>,
    mpre: Vec<MprefixRule>,
    stemsubscr: Vec<String>,
    quotes: Vec<String>,
    bullets: Vec<String>,
}

impl AffixTable {
    pub fn builder() -> AffixTableBuilder {
        AffixTableBuilder::default()
    }

    pub fn lpunc(&self) -> &[String] {
        &self.lpunc
    }

    pub fn rpunc(&self) -> &[String] {
        &self.rpunc
    }

    pub fn units(&self) -> &[String] {
        &self.units
    }

    pub fn pre(&self) -> &[String] {
        &self.pre
    }

    pub fn suf(&self) -> &[SufEntry] {
        &self.suf
    }

    /// `MPRE` entries, already sorted longest-subword-first (greedy-longest
    /// matching, per spec §4.2).
    pub fn mpre(&self) -> &[MprefixRule] {
        &self.mpre
    }

    pub fn stemsubscr(&self) -> &[String] {
        &self.stemsubscr
    }

    pub fn quotes(&self) -> &[String] {
        &self.quotes
    }

    pub fn bullets(&self) -> &[String] {
        &self.bullets
    }

    /// Subwords flagged `chain_initial_only`, longest first.
    pub fn chain_initial_subwords(&self) -> impl Iterator<Item = &str> {
        self.mpre.iter().filter(|r| r.chain_initial_only).map(|r| r.subword.as_str())
    }
}

#[derive(Debug, Clone, Default)]
pub struct AffixTableBuilder {
    lpunc: Vec<String>,
    rpunc: Vec<String>,
    units: Vec<String>,
    pre: Vec<String>,
    suf: Vec<SufEntry>,
    mpre: Vec<MprefixRule>,
    stemsubscr: Vec<String>,
    quotes: Vec<String>,
    bullets: Vec<String>,
}

macro_rules! setter {
    ($name:ident, $field:ident) => {
        pub fn $name<I, S>(mut self, items: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            self.$field = items.into_iter().map(Into::into).collect();
            self
        }
    };
}

/// Order-preserving dedup: keeps the first occurrence of each value.
fn dedup_preserve_order(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(items.len());
    items.into_iter().filter(|s| seen.insert(s.clone())).collect()
}

impl AffixTableBuilder {
    setter!(lpunc, lpunc);
    setter!(rpunc, rpunc);
    setter!(units, units);
    setter!(pre, pre);
    setter!(stemsubscr, stemsubscr);
    setter!(quotes, quotes);
    setter!(bullets, bullets);

    pub fn suf<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SufEntry>,
    {
        self.suf = items.into_iter().map(Into::into).collect();
        self
    }

    pub fn mpre(mut self, rules: impl IntoIterator<Item = MprefixRule>) -> Self {
        self.mpre = rules.into_iter().collect();
        self
    }

    pub fn build(mut self) -> Result<AffixTable> {
        if self.mpre.len() > MAX_MPRE_ENTRIES {
            return Err(TokenizeError::InvalidAffixTable(format!(
                "MPRE table has {} entries, limit is {MAX_MPRE_ENTRIES}",
                self.mpre.len()
            )));
        }
        self.mpre.sort_by(|a, b| b.subword.len().cmp(&a.subword.len()));

        self.lpunc = dedup_preserve_order(self.lpunc);
        self.rpunc = dedup_preserve_order(self.rpunc);
        self.units = dedup_preserve_order(self.units);
        self.pre = dedup_preserve_order(self.pre);
        self.stemsubscr = dedup_preserve_order(self.stemsubscr);
        self.quotes = dedup_preserve_order(self.quotes);
        self.bullets = dedup_preserve_order(self.bullets);

        let mut seen_suf = HashSet::with_capacity(self.suf.len());
        self.suf.retain(|s| seen_suf.insert(s.text.clone()));

        let mut seen_mpre = HashSet::with_capacity(self.mpre.len());
        self.mpre.retain(|r| seen_mpre.insert(r.subword.clone()));

        Ok(AffixTable {
            lpunc: self.lpunc,
            rpunc: self.rpunc,
            units: self.units,
            pre: self.pre,
            suf: self.suf,
            mpre: self.mpre,
            stemsubscr: self.stemsubscr,
            quotes: self.quotes,
            bullets: self.bullets,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mpre_sorted_longest_first() {
        let table = AffixTable::builder()
            .mpre([MprefixRule::new("a"), MprefixRule::new("abc"), MprefixRule::new("ab")])
            .build()
            .unwrap();
        let lens: Vec<_> = table.mpre().iter().map(|r| r.subword.len()).collect();
        assert_eq!(lens, vec![3, 2, 1]);
    }

    #[test]
    fn mpre_too_large_rejected() {
        let rules = (0..20).map(|i| MprefixRule::new(format!("p{i}")));
        let err = AffixTable::builder().mpre(rules).build().unwrap_err();
        assert!(matches!(err, TokenizeError::InvalidAffixTable(_)));
    }

    #[test]
    fn chain_initial_filter() {
        let table = AffixTable::builder()
            .mpre([MprefixRule::chain_initial("\u{05D5}"), MprefixRule::new("\u{05DB}\u{05E9}")])
            .build()
            .unwrap();
        let initial: Vec<_> = table.chain_initial_subwords().collect();
        assert_eq!(initial, vec!["\u{05D5}"]);
    }

    #[test]
    fn duplicate_class_entries_are_deduplicated() {
        let table = AffixTable::builder()
            .lpunc(["(", "(", "["])
            .suf([SufEntry::new("ed"), SufEntry::new("ed")])
            .build()
            .unwrap();
        assert_eq!(table.lpunc(), &["(".to_string(), "[".to_string()]);
        assert_eq!(table.suf().len(), 1);
    }

    #[test]
    fn verbatim_suffix_flag_round_trips() {
        let table = AffixTable::builder().suf([SufEntry::verbatim("'s"), SufEntry::new("'ve")]).build().unwrap();
        assert!(table.suf()[0].store_verbatim);
        assert!(!table.suf()[1].store_verbatim);
    }
}
