//! Vocabulary compiler — turns the flat skill-phrase list into token patterns.
//!
//! Compiled once at startup and shared read-only through `AppState`. There is no
//! mutation API after construction, so concurrent readers need no locking.

use std::collections::HashMap;

use crate::skills::tokenizer::tokenize;

/// Token-sequence form of one skill phrase, e.g. `["tailwind", "css"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPattern {
    tokens: Vec<String>,
    phrase: String,
}

impl CompiledPattern {
    /// Tokenizes with the same rules applied to document text, so `ci/cd`
    /// compiles to `["ci", "cd"]`. Returns `None` when the phrase has no word tokens.
    pub fn compile(phrase: &str) -> Option<Self> {
        let tokens: Vec<String> = tokenize(phrase).into_iter().map(|t| t.text).collect();
        if tokens.is_empty() {
            return None;
        }
        let phrase = phrase
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join(" ");
        Some(Self { tokens, phrase })
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Canonical lowercase form: the catalog phrase with whitespace collapsed.
    pub fn phrase(&self) -> &str {
        &self.phrase
    }
}

/// The full compiled vocabulary plus a head-token index used by the matcher.
#[derive(Debug, Clone, Default)]
pub struct SkillVocabulary {
    patterns: Vec<CompiledPattern>,
    by_head: HashMap<String, Vec<usize>>,
}

impl SkillVocabulary {
    pub fn compile<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns: Vec<CompiledPattern> = phrases
            .into_iter()
            .filter_map(|p| CompiledPattern::compile(p.as_ref()))
            .collect();

        let mut by_head: HashMap<String, Vec<usize>> = HashMap::new();
        for (idx, pattern) in patterns.iter().enumerate() {
            by_head
                .entry(pattern.tokens[0].clone())
                .or_default()
                .push(idx);
        }

        Self { patterns, by_head }
    }

    /// Patterns whose first token equals `head`.
    pub fn starting_with<'a>(&'a self, head: &str) -> impl Iterator<Item = &'a CompiledPattern> {
        self.by_head
            .get(head)
            .into_iter()
            .flatten()
            .map(move |&idx| &self.patterns[idx])
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    #[cfg(test)]
    pub fn contains_phrase(&self, phrase: &str) -> bool {
        self.patterns.iter().any(|p| p.phrase == phrase)
    }
}
