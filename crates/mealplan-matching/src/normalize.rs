// ABOUTME: Text normalization applied before every ingredient or tag comparison
// ABOUTME: Lowercases, folds accented Latin letters, strips punctuation, collapses whitespace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplan Contributors

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Letters without a canonical decomposition that still need folding
fn fold_special(c: char) -> Option<&'static str> {
    match c {
        'ø' | 'Ø' => Some("o"),
        'æ' | 'Æ' => Some("ae"),
        'œ' | 'Œ' => Some("oe"),
        'ß' => Some("ss"),
        'ł' | 'Ł' => Some("l"),
        'đ' | 'Đ' => Some("d"),
        _ => None,
    }
}

/// Normalize text for fuzzy comparison
///
/// Lowercase, accented Latin characters folded to their base letter,
/// punctuation and symbols removed, whitespace runs collapsed to a single
/// space, leading/trailing whitespace trimmed. Total for any input.
///
/// ```
/// use mealplan_matching::normalize;
///
/// assert_eq!(normalize("Csirkemáj"), "csirkemaj");
/// assert_eq!(normalize("  Túró,   rudi! "), "turo rudi");
/// ```
#[must_use]
pub fn normalize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_space = false;

    for c in input.nfd().filter(|c| !is_combining_mark(*c)) {
        if c.is_whitespace() {
            pending_space = true;
            continue;
        }
        if !c.is_alphanumeric() {
            continue;
        }
        if pending_space && !out.is_empty() {
            out.push(' ');
        }
        pending_space = false;
        match fold_special(c) {
            Some(folded) => out.push_str(folded),
            None => out.extend(c.to_lowercase()),
        }
    }

    out
}

/// [`normalize`] with all whitespace removed
///
/// Lets `"Csirke máj"` and `"csirkemáj"` compare equal.
#[must_use]
pub fn normalize_compact(input: &str) -> String {
    normalize(input).chars().filter(|c| *c != ' ').collect()
}
