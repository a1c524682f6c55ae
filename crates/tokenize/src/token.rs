use serde::{Deserialize, Serialize};

use crate::class::{classify, TokenClass};

/// A token with its UTF-8 byte offsets in the source text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Token {
    /// The token text content.
    pub text: String,
    /// Byte offset (inclusive) in the source text.
    pub start: usize,
    /// Byte offset (exclusive) in the source text.
    pub end: usize,
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        self.text.as_str()
    }
}

/// Splits `text` into comparison tokens.
///
/// CJK characters and ASCII alphanumerics accumulate into runs; whitespace
/// and every other character become single-character tokens. A run ends as
/// soon as a character of a different class appears, so `"Hello世界"` yields
/// two tokens.
///
/// Tokenization is total and lossless: concatenating the returned tokens in
/// order reproduces `text`, and the empty string yields no tokens.
///
/// ```
/// use tokenize::tokenize;
///
/// let tokens = tokenize("Hello世界!");
/// let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
/// assert_eq!(texts, ["Hello", "世界", "!"]);
/// ```
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::with_capacity((text.len() / 4).saturating_add(1));
    let mut run: Option<(usize, TokenClass)> = None;

    for (idx, ch) in text.char_indices() {
        let class = classify(ch);

        if let Some((run_start, run_class)) = run {
            if run_class == class {
                continue;
            }
            push_token(&mut tokens, text, run_start, idx);
            run = None;
        }

        if class.accumulates() {
            run = Some((idx, class));
        } else {
            push_token(&mut tokens, text, idx, idx + ch.len_utf8());
        }
    }

    // Flush the trailing run.
    if let Some((run_start, _)) = run {
        push_token(&mut tokens, text, run_start, text.len());
    }

    tokens
}

fn push_token(tokens: &mut Vec<Token>, text: &str, start: usize, end: usize) {
    tokens.push(Token {
        text: text[start..end].to_string(),
        start,
        end,
    });
}
