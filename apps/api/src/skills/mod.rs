// Skill extraction pipeline: vocabulary compilation, tokenization, matching.
// The vocabulary is compiled once at startup and passed in by reference; the
// matcher holds no state of its own.

pub mod handlers;
pub mod matcher;
pub mod tokenizer;
pub mod vocabulary;
