//! C4 — Word Separator.
//!
//! Takes one whitespace/quote-free orthographic chunk and issues zero or
//! more alternatives onto the sentence, following the fixed 13-stage
//! pipeline of §4.4. Each stage may add alternatives but never cancels an
//! earlier one; what ends up committed is whatever stuck.

use std::collections::HashSet;

use log::{trace, warn};

use crate::affix::{AffixTable, SufEntry};
use crate::charclass::{downcase, is_bullet_str, is_number, is_upper, starts_with_digit};
use crate::dict::{Dictionary, SpellChecker};
use crate::error::Result;
use crate::options::{TestFlag, TokenizerOptions};
use crate::token::{AltGroup, Sentence, INFIX_MARK, REGEX_MARK, SPELL_GUESS_MARK};

/// Maximum number of right-strip iterations before Stage 8's escape kicks in.
pub const MAX_STRIP: usize = 10;

/// Maximum length of a multi-prefix chain (Stage 7).
pub const MAX_PREFIX_CHAIN: usize = 5;

/// Maximum number of spellcheck suggestions considered (Stage 11).
pub const MAX_NUM_SPELL_GUESSES: usize = 60;

/// Separate one orthographic chunk and commit its alternatives onto `sentence`.
///
/// `first_word_index` is the index of the first non-wall position in the
/// sentence (0 if there is no left wall, 1 if there is), used by the
/// capitalizable predicate.
#[allow(clippy::too_many_arguments)]
pub fn separate_word(
    sentence: &mut Sentence,
    dict: &dyn Dictionary,
    affix: &AffixTable,
    spell: Option<&dyn SpellChecker>,
    chunk: &str,
    quote_found: bool,
    first_word_index: usize,
    opts: &TokenizerOptions,
) -> Result<()> {
    trace!("separate_word: chunk={chunk:?} quote_found={quote_found}");
    let mut quote = quote_found;
    let mut w = chunk;

    // Stage 2 — left strip.
    loop {
        let Some(p) = affix.lpunc().iter().find(|p| !p.is_empty() && w.starts_with(p.as_str())) else { break };
        let q = std::mem::replace(&mut quote, false);
        sentence.issue_sentence_word(p, q);
        w = &w[p.len()..];
        if w.is_empty() {
            return Ok(());
        }
    }

    let mut word = w.to_string();
    let original_starts_with_digit = starts_with_digit(&word);

    // Stage 3 — right strip.
    let mut right_strips: Vec<String> = Vec::new();
    let mut prev_was_unit = false;
    let mut too_many_strips = false;

    for _ in 0..MAX_STRIP {
        if dict.find(&word) {
            break;
        }
        if let Some(p) = affix.rpunc().iter().find(|p| !p.is_empty() && word.ends_with(p.as_str())).cloned() {
            let cut = word.len() - p.len();
            word.truncate(cut);
            right_strips.push(p);
            prev_was_unit = false;
            if word.is_empty() {
                break;
            }
            continue;
        }
        if original_starts_with_digit && !prev_was_unit {
            if let Some(u) = affix.units().iter().find(|u| !u.is_empty() && word.ends_with(u.as_str())).cloned() {
                let cut = word.len() - u.len();
                word.truncate(cut);
                right_strips.push(u);
                prev_was_unit = true;
                if word.is_empty() {
                    break;
                }
                continue;
            }
        }
        break;
    }

    if right_strips.len() >= MAX_STRIP && !dict.find(&word) {
        warn!("too many right-strips on {chunk:?}, accepting whole chunk as unknown");
        too_many_strips = true;
    }

    if too_many_strips {
        let q = std::mem::replace(&mut quote, false);
        sentence.issue_sentence_word(w, q);
        return Ok(());
    }

    // Stage 4 — whole-word addition.
    let mut group = AltGroup::new();
    if !word.is_empty() && dict.exact_lookup(&word) {
        group.add_single(word.clone());
    }

    // Stage 5 — suffix split (and, nested, prefix split).
    let mut word_can_split = false;
    for row in suffix_split_rows(&word, affix, dict, opts) {
        if opts.verbosity > 0 {
            trace!("stage 5 (suffix split) added {row:?} for {word:?}");
        }
        group.add_row(row);
        word_can_split = true;
    }

    // Stage 6 — case-folded retry.
    let pos = sentence.len();
    let capitalizable = is_capitalizable(sentence, pos, first_word_index, quote, affix);
    let word_is_capitalized = word.chars().next().is_some_and(is_upper);
    if word_is_capitalized && capitalizable {
        let down = downcase(&word);
        for row in suffix_split_rows(&down, affix, dict, opts) {
            group.add_row(row);
            word_can_split = true;
        }
    }

    // Stage 7 — multi-prefix split.
    for row in mpre_chains(&word, affix, dict) {
        if opts.verbosity > 0 {
            trace!("stage 7 (multi-prefix) added {row:?} for {word:?}");
        }
        group.add_row(row);
        word_can_split = true;
    }

    // Stage 9 — capitalization alternatives.
    if word_is_capitalized {
        if !word_can_split && dict.match_regex(&word).is_some() {
            group.add_single(word.clone());
        }
        if capitalizable || quote {
            let down = downcase(&word);
            if dict.exact_lookup(&down) {
                // The capitalization path is what produced this match; keep
                // the original surface form alongside the downcased one
                // rather than letting the downcased form stand alone.
                if group.is_empty() {
                    group.add_single(word.clone());
                }
                group.add_single(down);
            }
        }
    }

    // Stage 10 — regex fallback.
    if group.is_empty() || opts.has_flag(TestFlag::ParallelRegex) {
        if dict.match_regex(&word).is_some() {
            if opts.has_flag(TestFlag::ParallelRegex) {
                group.add_single(format!("{word}{REGEX_MARK}"));
            } else if group.is_empty() {
                group.add_single(word.clone());
            }
        }
    }

    // Stage 11 — spellcheck fallback.
    let proper_noun = word.chars().next().is_some_and(is_upper);
    if !proper_noun && !is_number(&word) && opts.use_spell_guess && !dict.find(&word) {
        if let Some(spell) = spell {
            if !spell.test(&word) {
                let suggestions = spell.suggest(&word);
                if suggestions.len() > MAX_NUM_SPELL_GUESSES {
                    warn!("spellchecker returned {} suggestions for {word:?}, truncating", suggestions.len());
                }
                for suggestion in suggestions.into_iter().take(MAX_NUM_SPELL_GUESSES) {
                    if suggestion.contains(' ') {
                        let parts: Vec<String> = suggestion.split(' ').filter(|s| !s.is_empty()).map(str::to_string).collect();
                        if !parts.is_empty() {
                            if opts.verbosity > 0 {
                                trace!("stage 11 (spellcheck) added run-on {parts:?} for {word:?}");
                            }
                            group.add_row(parts);
                        }
                    } else if dict.exact_lookup(&suggestion) {
                        if opts.verbosity > 0 {
                            trace!("stage 11 (spellcheck) added {suggestion:?} for {word:?}");
                        }
                        group.add_single(format!("{suggestion}{SPELL_GUESS_MARK}"));
                    }
                }
            }
        }
    }

    // Stage 12 — commit.
    let q = std::mem::replace(&mut quote, false);
    sentence.issue_alternatives(group, &word, q)?;

    // Stage 13 — emit trailing strips in reverse (rightmost-first) order.
    for tok in right_strips.iter().rev() {
        sentence.issue_sentence_word(tok, false);
    }

    Ok(())
}

/// `true` iff `sentence`'s about-to-be-created position `pos` is capitalizable
/// (§4.4 "Capitalizability predicate").
fn is_capitalizable(
    sentence: &Sentence,
    pos: usize,
    first_word_index: usize,
    quote_pending: bool,
    affix: &AffixTable,
) -> bool {
    if pos == first_word_index {
        return true;
    }
    if quote_pending {
        return true;
    }
    if pos == 0 {
        return false;
    }
    let prev = &sentence.positions()[pos - 1];
    if let Some(&first_alt) = prev.alternatives.first() {
        let s = sentence.resolve(first_alt);
        if s == ":" || s == "." {
            return true;
        }
        if is_bullet_str(s, affix) {
            return true;
        }
    }
    false
}

fn decorate_prefix(p: &str) -> String {
    format!("{p}{INFIX_MARK}")
}

/// Decorate a matched `SUF` entry for storage as an alternative.
///
/// A suffix stored verbatim (`store_verbatim`, e.g. the possessive `"'s"`) or
/// under the `no-suffixes` test flag is kept exactly as written. Otherwise it
/// is prefixed with [`INFIX_MARK`], dropping a leading apostrophe in favor of
/// the mark (e.g. the `SUF` entry `"'ve"` decorates to `"=ve"`, not `"='ve"`).
fn decorate_suffix(s: &SufEntry, opts: &TokenizerOptions) -> String {
    if s.text.is_empty() {
        return String::new();
    }
    if opts.has_flag(TestFlag::NoSuffixes) || s.store_verbatim {
        return s.text.clone();
    }
    let stripped = s.text.strip_prefix('\'').unwrap_or(&s.text);
    format!("{INFIX_MARK}{stripped}")
}

/// Stage 5: suffix splits (`(∅, stem, s)`) and, nested per suffix, prefix
/// splits (`(p, middle, s)`), including the empty-suffix pass that covers
/// prefix-only splits.
///
/// The empty-suffix pass exists only to let the nested prefix loop run with
/// no suffix attached; it must not also re-add the bare whole word as its
/// own stem-only row, since Stage 4 already owns that case (a real `s` is
/// required for the stem-only row below).
fn suffix_split_rows(word: &str, affix: &AffixTable, dict: &dyn Dictionary, opts: &TokenizerOptions) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let empty = SufEntry::new(String::new());
    let suf_iter = affix.suf().iter().chain(std::iter::once(&empty));

    for s in suf_iter {
        if !word.ends_with(s.text.as_str()) {
            continue;
        }
        let stem = &word[..word.len() - s.text.len()];

        if !s.text.is_empty() && !stem.is_empty() && dict.find(stem) {
            let accept = if affix.stemsubscr().is_empty() {
                true
            } else {
                affix.stemsubscr().iter().any(|sig| dict.exact_lookup(&format!("{stem}{sig}")))
            };
            if accept {
                rows.push(vec![stem.to_string(), decorate_suffix(s, opts)]);
            }
        }

        for p in affix.pre() {
            if word.len() < p.len() + s.text.len() || !word.starts_with(p.as_str()) {
                continue;
            }
            let middle = &word[p.len()..word.len() - s.text.len()];
            if middle.is_empty() || !dict.exact_lookup(middle) {
                continue;
            }
            let mut row = vec![decorate_prefix(p), middle.to_string()];
            if !s.text.is_empty() {
                row.push(decorate_suffix(s, opts));
            }
            rows.push(row);
        }
    }

    rows
}

/// Stage 7: every accepted multi-prefix chain, as rows of `(subword...,
/// [residual])`.
fn mpre_chains(word: &str, affix: &AffixTable, dict: &dyn Dictionary) -> Vec<Vec<String>> {
    if affix.mpre().is_empty() {
        return Vec::new();
    }
    let mut rows = Vec::new();
    let mut chain: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    mpre_recurse(word, affix, dict, &mut chain, &mut seen, &mut rows);
    rows
}

fn mpre_recurse(
    residual: &str,
    affix: &AffixTable,
    dict: &dyn Dictionary,
    chain: &mut Vec<String>,
    seen: &mut HashSet<String>,
    rows: &mut Vec<Vec<String>>,
) {
    if chain.len() >= MAX_PREFIX_CHAIN {
        return;
    }

    for rule in affix.mpre() {
        let subword = rule.subword.as_str();
        if seen.contains(subword) || rule.chain_initial_only && !chain.is_empty() {
            continue;
        }
        if !residual.starts_with(subword) {
            continue;
        }

        let mut next_residual = &residual[subword.len()..];

        if !rule.chain_initial_only {
            if affix.chain_initial_subwords().any(|ci| next_residual == ci) {
                continue;
            }
            if let Some(ci) =
                affix.chain_initial_subwords().find(|ci| !ci.is_empty() && next_residual.starts_with(&format!("{ci}{ci}")))
            {
                next_residual = &next_residual[ci.len()..];
            }
        }

        chain.push(subword.to_string());
        seen.insert(subword.to_string());

        if next_residual.is_empty() {
            rows.push(chain.clone());
        } else {
            if dict.find(next_residual) {
                let mut row = chain.clone();
                row.push(next_residual.to_string());
                rows.push(row);
            }
            mpre_recurse(next_residual, affix, dict, chain, seen, rows);
        }

        seen.remove(subword);
        chain.pop();
    }
}
