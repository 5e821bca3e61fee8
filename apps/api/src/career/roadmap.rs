//! One learning resource per missing skill.

use std::collections::HashSet;

use serde::Serialize;

use crate::career::catalog::CareerCatalog;

/// Search query used when the catalog has no curated resource for a skill.
pub const FALLBACK_SEARCH_URL: &str = "https://www.google.com/search?q=how+to+learn+";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoadmapEntry {
    pub skill: String,
    pub resource: String,
}

pub fn fallback_resource(skill: &str) -> String {
    format!("{FALLBACK_SEARCH_URL}{}", urlencoding::encode(skill))
}

/// Builds the roadmap in `skills_to_learn` order, skipping repeated skills.
pub fn build_roadmap(skills_to_learn: &[String], catalog: &CareerCatalog) -> Vec<RoadmapEntry> {
    let mut seen = HashSet::new();
    skills_to_learn
        .iter()
        .filter(|skill| seen.insert(*skill))
        .map(|skill| RoadmapEntry {
            skill: skill.clone(),
            resource: catalog
                .resource_for(skill)
                .map(str::to_string)
                .unwrap_or_else(|| fallback_resource(skill)),
        })
        .collect()
}
