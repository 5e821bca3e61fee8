//! Gap analysis: which required skills the candidate already has and which are
//! still missing.
//!
//! `known_skills = current ∩ required`, `skills_to_learn = required − current`.
//! Both outputs follow the order of `required` and contain no duplicates, so
//! together they partition the required set.

use std::collections::HashSet;

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GapAnalysis {
    pub known_skills: Vec<String>,
    pub skills_to_learn: Vec<String>,
}

pub fn analyze_gap<C, R>(current: C, required: R) -> GapAnalysis
where
    C: IntoIterator,
    C::Item: AsRef<str>,
    R: IntoIterator,
    R::Item: AsRef<str>,
{
    let current: HashSet<String> = current
        .into_iter()
        .map(|s| s.as_ref().to_string())
        .collect();

    let mut seen = HashSet::new();
    let mut result = GapAnalysis::default();
    for skill in required {
        let skill = skill.as_ref();
        if !seen.insert(skill.to_string()) {
            continue;
        }
        if current.contains(skill) {
            result.known_skills.push(skill.to_string());
        } else {
            result.skills_to_learn.push(skill.to_string());
        }
    }
    result
}
