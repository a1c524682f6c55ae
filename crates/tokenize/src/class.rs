//! Character classes used to split text into comparison units.
//!
//! The classes only drive tokenization. They are not stored on the produced
//! [`Token`](crate::Token), and alignment compares tokens by text alone.

use serde::{Deserialize, Serialize};

/// Hiragana block.
const HIRAGANA: std::ops::RangeInclusive<u32> = 0x3040..=0x309F;
/// Katakana block, including the prolonged sound mark `ー` (U+30FC).
const KATAKANA: std::ops::RangeInclusive<u32> = 0x30A0..=0x30FF;
/// CJK Unified Ideographs, up to U+9FAF.
const CJK_IDEOGRAPHS: std::ops::RangeInclusive<u32> = 0x4E00..=0x9FAF;

/// The class a single character falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenClass {
    /// Any whitespace character. Always a token of its own.
    Whitespace,
    /// Hiragana, Katakana or CJK ideograph. Consecutive characters form one run.
    Cjk,
    /// ASCII letter or digit. Consecutive characters form one run.
    Alphanumeric,
    /// Everything else: punctuation, symbols, full-width punctuation, emoji.
    Other,
}

impl TokenClass {
    /// Whether consecutive characters of this class merge into one token.
    #[inline]
    pub fn accumulates(self) -> bool {
        matches!(self, TokenClass::Cjk | TokenClass::Alphanumeric)
    }
}

/// Classifies a single character.
///
/// Whitespace follows [`char::is_whitespace`] and additionally treats the
/// byte order mark U+FEFF as whitespace.
///
/// ```
/// use tokenize::{classify, TokenClass};
///
/// assert_eq!(classify(' '), TokenClass::Whitespace);
/// assert_eq!(classify('は'), TokenClass::Cjk);
/// assert_eq!(classify('ー'), TokenClass::Cjk);
/// assert_eq!(classify('7'), TokenClass::Alphanumeric);
/// assert_eq!(classify('。'), TokenClass::Other);
/// ```
#[inline]
pub fn classify(ch: char) -> TokenClass {
    if ch.is_whitespace() || ch == '\u{FEFF}' {
        return TokenClass::Whitespace;
    }
    let code = ch as u32;
    if HIRAGANA.contains(&code) || KATAKANA.contains(&code) || CJK_IDEOGRAPHS.contains(&code) {
        return TokenClass::Cjk;
    }
    if ch.is_ascii_alphanumeric() {
        return TokenClass::Alphanumeric;
    }
    TokenClass::Other
}
