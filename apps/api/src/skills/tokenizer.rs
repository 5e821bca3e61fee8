//! Splits document text into lowercase word tokens with byte offsets, in reading order.

/// Characters that may appear inside a token alongside alphanumerics,
/// so `react.js`, `scikit-learn`, `c++` and `c#` stay whole.
const JOINERS: [char; 5] = ['.', '-', '+', '#', '_'];

/// Same as `JOINERS` without `-`, so `python-based` splits into two words.
const JOINERS_NO_HYPHEN: [char; 4] = ['.', '+', '#', '_'];

/// Joiners stripped from token edges. `+` and `#` are kept (`c++`, `c#`).
const EDGE_TRIM: [char; 3] = ['.', '-', '_'];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    /// Byte offset of the token's first character in the source text.
    pub offset: usize,
}

pub fn tokenize(text: &str) -> Vec<Token> {
    tokenize_with(text, &JOINERS)
}

/// Tokenizes with `-` as a separator. Used as a second matching pass so skills
/// written inside hyphenated compounds ("Git-driven") are still found.
pub fn tokenize_hyphen_split(text: &str) -> Vec<Token> {
    tokenize_with(text, &JOINERS_NO_HYPHEN)
}

fn tokenize_with(text: &str, joiners: &[char]) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;

    for (idx, ch) in text.char_indices() {
        let is_token_char = ch.is_alphanumeric() || joiners.contains(&ch);
        match (is_token_char, start) {
            (true, None) => start = Some(idx),
            (false, Some(s)) => {
                push_token(&mut tokens, text, s, idx);
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        push_token(&mut tokens, text, s, text.len());
    }

    tokens
}

/// A single leading dot before a word is part of the name (`.net`); longer runs
/// ("...go") and other edge joiners are trimmed.
fn trim_front(raw: &str) -> &str {
    let mut chars = raw.chars();
    if chars.next() == Some('.') && chars.next().is_some_and(char::is_alphanumeric) {
        return raw;
    }
    raw.trim_start_matches(|c: char| EDGE_TRIM.contains(&c))
}

fn push_token(tokens: &mut Vec<Token>, text: &str, start: usize, end: usize) {
    let raw = &text[start..end];
    let trimmed_front = trim_front(raw);
    let trimmed = trimmed_front.trim_end_matches(|c: char| EDGE_TRIM.contains(&c));
    if !trimmed.chars().any(char::is_alphanumeric) {
        return;
    }
    tokens.push(Token {
        text: trimmed.to_lowercase(),
        offset: start + (raw.len() - trimmed_front.len()),
    });
}
