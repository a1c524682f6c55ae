//! Comparison keys for tokens.
//!
//! Token texts are interned into dense `u32` ids shared by both sides, so the
//! LCS table compares integers instead of strings. Two tokens receive the
//! same id exactly when their keys are equal, which keeps the table
//! identical to one built over the strings themselves.

use std::borrow::Cow;

use fxhash::FxHashMap;
use tokenize::Token;
use unicode_normalization::{is_nfkc, UnicodeNormalization};

/// Interns the keys of two token sequences into a shared id space.
pub(crate) fn intern_pair(a: &[Token], b: &[Token], normalize: bool) -> (Vec<u32>, Vec<u32>) {
    let mut ids: FxHashMap<Cow<'_, str>, u32> = FxHashMap::default();
    ids.reserve(a.len().max(b.len()));

    let ids_a = intern_side(a, normalize, &mut ids);
    let ids_b = intern_side(b, normalize, &mut ids);
    (ids_a, ids_b)
}

fn intern_side<'t>(
    tokens: &'t [Token],
    normalize: bool,
    ids: &mut FxHashMap<Cow<'t, str>, u32>,
) -> Vec<u32> {
    let mut out = Vec::with_capacity(tokens.len());
    for token in tokens {
        let key = comparison_key(&token.text, normalize);
        let next = ids.len() as u32;
        out.push(*ids.entry(key).or_insert(next));
    }
    out
}

/// The string a token is compared by: its text, or its NFKC form.
fn comparison_key(text: &str, normalize: bool) -> Cow<'_, str> {
    if normalize && !is_nfkc(text) {
        Cow::Owned(text.nfkc().collect())
    } else {
        Cow::Borrowed(text)
    }
}
