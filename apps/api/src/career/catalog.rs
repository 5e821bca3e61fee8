//! Career catalog — skill vocabulary, career profiles, learning resources and the
//! questionnaire decision table, held as plain data.
//!
//! `CareerCatalog::builtin()` carries the shipped tables. A JSON file with the same
//! shape can replace them at startup (`CATALOG_PATH`).

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const FALLBACK_CAREER: &str = "General IT Consultant";

const SKILL_LIST: &[&str] = &[
    "python", "java", "c++", "javascript", "react", "react.js", "next.js",
    "tailwind css", "flask", "django", "mysql", "postgresql", "mongodb",
    "scikit-learn", "pandas", "numpy", "spacy", "nltk", "tensorflow", "keras",
    "aws", "docker", "git", "machine learning", "data analysis",
    "natural language processing", "nlp", "figma", "qa testing", "go", "swift",
    "kotlin", "ruby", "php", "sql", "adobe xd", "sketch", "jira", "selenium",
];

// (name, description, required skills)
const CAREERS: &[(&str, &str, &[&str])] = &[
    (
        "Software Engineer",
        "You enjoy solving logical problems and building things. This is a perfect fit for writing code!",
        &["python", "git", "react", "mysql", "aws"],
    ),
    (
        "Technical Project Manager",
        "You like logic and organizing.",
        &["git", "react", "agile", "scrum"],
    ),
    (
        "QA Engineer / Support Engineer",
        "You like logic and finding problems.",
        &["qa testing", "git", "javascript"],
    ),
    (
        "UI/UX Designer",
        "You love design and building.",
        &["figma", "tailwind css", "javascript"],
    ),
    (
        "Design Manager",
        "You have a creative mind and enjoy leading.",
        &["figma", "agile", "project management"],
    ),
    (
        "Data Scientist",
        "You enjoy analyzing data and building models.",
        &["python", "pandas", "scikit-learn", "tensorflow"],
    ),
    (
        "Data Analyst",
        "You enjoy analyzing data and finding trends.",
        &["python", "pandas", "mysql", "tableau"],
    ),
    (
        "General IT Consultant",
        "You have a broad set of interests! A role as a consultant would let you try many different things.",
        &["aws", "python", "project management"],
    ),
    (
        "Mobile Developer",
        "You like building apps people carry in their pocket.",
        &["swift", "kotlin", "react", "git"],
    ),
    (
        "Backend Developer",
        "You like building the services and data layers behind an application.",
        &["go", "python", "sql", "docker", "aws"],
    ),
];

const RESOURCES: &[(&str, &str)] = &[
    ("python", "https://www.coursera.org/learn/python-for-everybody"),
    ("git", "https://www.atlassian.com/git/tutorials/what-is-git"),
    ("react", "https://react.dev/learn"),
    ("mysql", "https://www.coursera.org/learn/sql-for-data-science"),
    ("aws", "https://aws.amazon.com/training/digital/"),
    ("agile", "https://www.atlassian.com/agile"),
    ("scrum", "https://www.scrum.org/resources/what-is-scrum"),
    ("qa testing", "https://www.guru99.com/software-testing-introduction-importance.html"),
    ("javascript", "https://developer.mozilla.org/en-US/docs/Web/JavaScript/Guide"),
    ("figma", "https://www.figma.com/learn/"),
    ("tailwind css", "https://tailwindcss.com/docs/utility-first"),
    ("project management", "https://www.coursera.org/learn/project-management-basics"),
    ("pandas", "https://pandas.pydata.org/docs/user_guide/10min.html"),
    ("scikit-learn", "https://scikit-learn.org/stable/tutorial/basic/tutorial.html"),
    ("tensorflow", "https://www.tensorflow.org/tutorials"),
    ("tableau", "https://www.tableau.com/learn/training/2022-2"),
    ("sql", "https://www.w3schools.com/sql/"),
    ("jira", "https://www.atlassian.com/software/jira/guides"),
];

// Evaluated top to bottom; first match wins. Absent q2 means "any answer".
const RULES: &[(&str, Option<&str>, &str)] = &[
    ("logic", Some("builder"), "Software Engineer"),
    ("logic", Some("leader"), "Technical Project Manager"),
    ("logic", None, "QA Engineer / Support Engineer"),
    ("creative", Some("builder"), "UI/UX Designer"),
    ("creative", None, "Design Manager"),
    ("data", Some("builder"), "Data Scientist"),
    ("data", None, "Data Analyst"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerProfile {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Ordered; gap analysis output follows this order.
    pub required_skills: Vec<String>,
}

/// One row of the questionnaire decision table. Matches when every key in
/// `when` is answered with exactly that value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationRule {
    pub when: BTreeMap<String, String>,
    pub career: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerCatalog {
    pub skills: Vec<String>,
    pub careers: Vec<CareerProfile>,
    pub resources: HashMap<String, String>,
    pub rules: Vec<RecommendationRule>,
    pub fallback_career: String,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("catalog references unknown career '{0}'")]
    UnknownCareer(String),

    #[error("catalog defines career '{0}' more than once")]
    DuplicateCareer(String),
}

impl CareerCatalog {
    pub fn builtin() -> Self {
        let careers = CAREERS
            .iter()
            .map(|(name, description, skills)| CareerProfile {
                name: name.to_string(),
                description: description.to_string(),
                required_skills: skills.iter().map(|s| s.to_string()).collect(),
            })
            .collect();

        let rules = RULES
            .iter()
            .map(|(q1, q2, career)| {
                let mut when = BTreeMap::from([("q1".to_string(), q1.to_string())]);
                if let Some(q2) = q2 {
                    when.insert("q2".to_string(), q2.to_string());
                }
                RecommendationRule {
                    when,
                    career: career.to_string(),
                }
            })
            .collect();

        CareerCatalog {
            skills: SKILL_LIST.iter().map(|s| s.to_string()).collect(),
            careers,
            resources: RESOURCES
                .iter()
                .map(|(skill, url)| (skill.to_string(), url.to_string()))
                .collect(),
            rules,
            fallback_career: FALLBACK_CAREER.to_string(),
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let catalog: CareerCatalog = serde_json::from_str(raw)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&raw)
    }

    /// Every rule target and the fallback must name a defined career.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = std::collections::HashSet::new();
        for career in &self.careers {
            if !seen.insert(career.name.as_str()) {
                return Err(CatalogError::DuplicateCareer(career.name.clone()));
            }
        }
        let targets = self
            .rules
            .iter()
            .map(|r| &r.career)
            .chain(std::iter::once(&self.fallback_career));
        for target in targets {
            if !seen.contains(target.as_str()) {
                return Err(CatalogError::UnknownCareer(target.clone()));
            }
        }
        Ok(())
    }

    pub fn career(&self, name: &str) -> Option<&CareerProfile> {
        self.careers.iter().find(|c| c.name == name)
    }

    pub fn resource_for(&self, skill: &str) -> Option<&str> {
        self.resources.get(skill).map(String::as_str)
    }
}
