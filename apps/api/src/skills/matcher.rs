//! Skill matcher — exact, case-insensitive token-sequence matching against the
//! compiled vocabulary.
//!
//! Every window that equals a pattern token-for-token is recorded, including
//! overlapping windows of different patterns ("react" and "react native").
//! Repeated occurrences collapse into one set entry. Text containing `-` gets
//! a second pass with hyphens as separators, so "Python-based" yields `python`
//! while `scikit-learn` still matches whole.

use std::collections::BTreeSet;

use tracing::debug;

use crate::skills::tokenizer::{tokenize, tokenize_hyphen_split, Token};
use crate::skills::vocabulary::SkillVocabulary;

/// Canonical lowercase phrases found in one document. Sorted for stable output.
pub type MatchedSkillSet = BTreeSet<String>;

pub fn match_tokens(tokens: &[Token], vocabulary: &SkillVocabulary) -> MatchedSkillSet {
    let mut found = MatchedSkillSet::new();

    for (start, token) in tokens.iter().enumerate() {
        for pattern in vocabulary.starting_with(&token.text) {
            let len = pattern.tokens().len();
            let Some(window) = tokens.get(start..start + len) else {
                continue;
            };
            let is_match = window
                .iter()
                .zip(pattern.tokens())
                .all(|(t, p)| t.text == *p);
            if is_match && found.insert(pattern.phrase().to_string()) {
                debug!(skill = pattern.phrase(), offset = token.offset, "Skill matched");
            }
        }
    }

    found
}

/// Tokenizes `text` and matches it against `vocabulary`.
pub fn extract_skills(text: &str, vocabulary: &SkillVocabulary) -> MatchedSkillSet {
    let mut found = match_tokens(&tokenize(text), vocabulary);
    if text.contains('-') {
        found.extend(match_tokens(&tokenize_hyphen_split(text), vocabulary));
    }
    found
}
