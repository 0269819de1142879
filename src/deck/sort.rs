//! Deck sort order.
//!
//! Composite key: supertype bucket, then (Pokémon only) the elemental type
//! of the first listed type, then card name. Names compare case- and
//! accent-insensitively first, with the raw string as tiebreak, so the order
//! is total and a stable sort is idempotent.

use std::cmp::Ordering;

use crate::cards::{Card, Supertype};

/// Compare two cards for deck display order.
#[must_use]
pub fn compare_cards(a: &Card, b: &Card) -> Ordering {
    let bucket_a = a.supertype_bucket();
    let bucket_b = b.supertype_bucket();

    bucket_a
        .cmp(&bucket_b)
        .then_with(|| {
            if bucket_a == Supertype::Pokemon {
                a.primary_type().cmp(&b.primary_type())
            } else {
                Ordering::Equal
            }
        })
        .then_with(|| locale_compare(&a.name, &b.name))
}

/// Compare names the way a reader would: ignore case and accents first.
#[must_use]
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    a.chars()
        .map(fold_char)
        .cmp(b.chars().map(fold_char))
        .then_with(|| a.cmp(b))
}

/// Lowercase and strip common Latin diacritics.
fn fold_char(c: char) -> char {
    let lower = c.to_lowercase().next().unwrap_or(c);
    match lower {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'ç' => 'c',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ñ' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ý' | 'ÿ' => 'y',
        other => other,
    }
}
