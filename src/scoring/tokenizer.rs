//! Whitespace tokenizer that keeps emoticons intact
//!
//! Each whitespace-separated chunk has surrounding ASCII punctuation
//! stripped ("great!" -> "great"), unless stripping would leave two
//! characters or fewer. That keeps ":)", ":D" and runs like "!!!" as
//! tokens of their own. Single-character tokens ("I", "a") are dropped.
//! Original casing is preserved for emphasis detection.

/// One word or emoticon from the input
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
    /// Token as it appeared (after punctuation stripping)
    pub text: &'a str,
    /// Lowercased form used for lookups
    pub lower: String,
}

impl<'a> Token<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            lower: text.to_lowercase(),
        }
    }

    /// True for words written entirely in capitals ("GREAT", "I'M").
    /// Tokens without any cased letters never count.
    pub fn is_shouting(&self) -> bool {
        self.text.chars().any(char::is_uppercase) && !self.text.chars().any(char::is_lowercase)
    }
}

/// Tokenized text plus the document-level facts the rules need
#[derive(Debug, Clone)]
pub struct SentiText<'a> {
    pub text: &'a str,
    pub tokens: Vec<Token<'a>>,
    /// Some, but not all, tokens are ALL CAPS
    pub is_cap_diff: bool,
}

impl<'a> SentiText<'a> {
    pub fn new(text: &'a str) -> Self {
        let tokens = tokenize(text);
        let is_cap_diff = cap_differential(&tokens);
        Self {
            text,
            tokens,
            is_cap_diff,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Split text into tokens
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    text.split_whitespace()
        .map(strip_punctuation)
        .filter(|t| t.chars().count() > 1)
        .map(Token::new)
        .collect()
}

fn strip_punctuation(raw: &str) -> &str {
    let stripped = raw.trim_matches(|c: char| c.is_ascii_punctuation());
    if stripped.chars().count() <= 2 {
        raw
    } else {
        stripped
    }
}

/// Caps only emphasize when the rest of the text is not shouting too
fn cap_differential(tokens: &[Token<'_>]) -> bool {
    let shouting = tokens.iter().filter(|t| t.is_shouting()).count();
    let differential = tokens.len() - shouting;
    differential > 0 && differential < tokens.len()
}
