//! Career recommendation selector — walks the decision table in order and falls
//! back to the catalog's designated career when no rule matches.

use std::collections::HashMap;

use serde::Serialize;

use crate::career::catalog::{CareerCatalog, CareerProfile, RecommendationRule};

/// Questionnaire answers keyed by question id (`q1`, `q2`, ...).
/// Unanswered questions are simply absent.
pub type Answers = HashMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub career: String,
    pub description: String,
}

fn rule_matches(rule: &RecommendationRule, answers: &Answers) -> bool {
    rule.when
        .iter()
        .all(|(question, expected)| answers.get(question) == Some(expected))
}

/// Picks the career profile for `answers`. Unknown or missing answers are not an
/// error; they resolve to the fallback career. `None` only when the catalog was
/// never validated and lacks the named profile.
pub fn select_career<'a>(
    catalog: &'a CareerCatalog,
    answers: &Answers,
) -> Option<&'a CareerProfile> {
    let name = catalog
        .rules
        .iter()
        .find(|rule| rule_matches(rule, answers))
        .map(|rule| rule.career.as_str())
        .unwrap_or(catalog.fallback_career.as_str());

    catalog.career(name)
}

impl From<&CareerProfile> for Recommendation {
    fn from(profile: &CareerProfile) -> Self {
        Recommendation {
            career: profile.name.clone(),
            description: profile.description.clone(),
        }
    }
}
