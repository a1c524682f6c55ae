//! Tokenizer for the variant diff engine.
//!
//! Splits free-form text (Japanese and English mixed) into the atomic units
//! the aligner compares. Tokens are grouped by script class:
//!
//! - whitespace: one token per character, never merged
//! - CJK (Hiragana, Katakana, CJK Unified Ideographs): maximal runs
//! - ASCII letters and digits: maximal runs
//! - anything else: one token per character
//!
//! ## Pure function guarantee
//!
//! No I/O, no locale dependence. The same text always produces the same
//! tokens, and the tokens concatenate back to the input byte for byte.

mod class;
mod token;

pub use crate::class::{classify, TokenClass};
pub use crate::token::{tokenize, Token};
