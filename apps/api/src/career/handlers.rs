//! Axum route handler for the questionnaire + gap analysis endpoint.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::info;

use crate::career::gap::{analyze_gap, GapAnalysis};
use crate::career::recommend::{select_career, Answers, Recommendation};
use crate::career::roadmap::{build_roadmap, RoadmapEntry};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub answers: Option<Map<String, Value>>,
    /// Skills the candidate declares, normally the list returned by upload.
    /// Kept as raw JSON so a stray non-string entry cannot reject the request.
    #[serde(default)]
    pub current_skills: Option<Vec<Value>>,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub recommendation: Recommendation,
    pub gap_analysis: GapAnalysis,
    pub roadmap: Vec<RoadmapEntry>,
}

impl QuizRequest {
    /// Non-string answers are treated as unanswered.
    fn answers(&self) -> Answers {
        self.answers
            .iter()
            .flatten()
            .filter_map(|(question, answer)| {
                answer.as_str().map(|a| (question.clone(), a.to_string()))
            })
            .collect()
    }

    /// String entries only, trimmed and lowercased, blanks dropped; comparable
    /// with catalog skill names.
    fn normalized_skills(&self) -> Vec<String> {
        self.current_skills
            .iter()
            .flatten()
            .filter_map(Value::as_str)
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// POST /api/quiz-recommendation
pub async fn handle_quiz_recommendation(
    State(state): State<AppState>,
    Json(request): Json<QuizRequest>,
) -> Result<Json<QuizResponse>, AppError> {
    let answers = request.answers();
    let profile = select_career(&state.catalog, &answers).ok_or_else(|| {
        AppError::Internal(anyhow::anyhow!(
            "catalog has no profile for fallback career '{}'",
            state.catalog.fallback_career
        ))
    })?;

    let gap_analysis = analyze_gap(request.normalized_skills(), &profile.required_skills);
    let roadmap = build_roadmap(&gap_analysis.skills_to_learn, &state.catalog);

    info!(
        career = %profile.name,
        known = gap_analysis.known_skills.len(),
        to_learn = gap_analysis.skills_to_learn.len(),
        "Quiz recommendation computed"
    );

    Ok(Json(QuizResponse {
        recommendation: Recommendation::from(profile),
        gap_analysis,
        roadmap,
    }))
}
