//! Axum route handlers for the Progression API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::progression::analyzer::{
    analyze_progression, GapAnalysisResult, ProgressionResult, ReadinessBand,
};
use crate::progression::learning_path::{
    generate_learning_path, group_by_priority, LearningRecommendation, PriorityGroups,
};
use crate::progression::team::{summarize_team, TeamMember, TeamReadinessReport};
use crate::skills::{CareerGrade, ProficiencyLevel, Skill, SkillAssessment, SkillRequirement};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub current_grade: CareerGrade,
    pub assessment: SkillAssessment,
    #[serde(default)]
    pub include_learning_path: bool,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub current_grade: CareerGrade,
    pub terminal: bool,
    pub progression: Option<ProgressionResult>,
    pub readiness_band: Option<ReadinessBand>,
    pub promotion_ready: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub learning_path: Option<Vec<LearningRecommendation>>,
}

/// A gap as supplied by a client. Gap size and label are recomputed server-side.
#[derive(Debug, Deserialize)]
pub struct GapInput {
    pub skill: Skill,
    pub current: ProficiencyLevel,
    pub required: ProficiencyLevel,
    pub weight: f64,
}

#[derive(Debug, Deserialize)]
pub struct LearningPathRequest {
    pub gaps: Vec<GapInput>,
}

#[derive(Debug, Serialize)]
pub struct LearningPathResponse {
    pub recommendations: Vec<LearningRecommendation>,
    pub by_priority: PriorityGroups,
}

#[derive(Debug, Deserialize)]
pub struct TeamReadinessRequest {
    pub members: Vec<TeamMember>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/progression/analyze
///
/// Gap analysis against the next grade. At the last grade `progression` is null and
/// `terminal` is true; this is not an error.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let progression =
        analyze_progression(request.current_grade, &request.assessment, &state.requirements);

    let learning_path = match (&progression, request.include_learning_path) {
        (Some(result), true) => Some(generate_learning_path(
            &result.gaps,
            &state.advice,
            &state.config.priority_thresholds,
        )?),
        _ => None,
    };

    match &progression {
        Some(result) => info!(
            "Analyzed {} -> {}: readiness {}%, {} gap(s)",
            result.current_grade,
            result.target_grade,
            result.readiness_percentage,
            result.gaps.len()
        ),
        None => debug!("{} is the last grade; nothing to analyze", request.current_grade),
    }

    let readiness_band = progression.as_ref().map(ProgressionResult::band);

    Ok(Json(AnalyzeResponse {
        current_grade: request.current_grade,
        terminal: progression.is_none(),
        promotion_ready: readiness_band.is_some_and(ReadinessBand::is_promotion_ready),
        readiness_band,
        progression,
        learning_path,
    }))
}

/// POST /api/v1/progression/learning-path
///
/// Builds a learning path from an arbitrary gap list. Entries whose current level
/// already meets the requirement are not gaps and are skipped.
pub async fn handle_learning_path(
    State(state): State<AppState>,
    Json(request): Json<LearningPathRequest>,
) -> Result<Json<LearningPathResponse>, AppError> {
    let mut gaps = Vec::with_capacity(request.gaps.len());
    for input in request.gaps {
        if !input.weight.is_finite() || input.weight <= 0.0 {
            return Err(AppError::Validation(format!(
                "weight for '{}' must be a positive number",
                input.skill
            )));
        }
        let gap = GapAnalysisResult::evaluate(
            input.skill,
            input.current,
            SkillRequirement {
                required: input.required,
                weight: input.weight,
            },
        );
        if gap.is_gap() {
            gaps.push(gap);
        }
    }

    let recommendations =
        generate_learning_path(&gaps, &state.advice, &state.config.priority_thresholds)?;
    debug!("Generated {} learning recommendation(s)", recommendations.len());

    Ok(Json(LearningPathResponse {
        by_priority: group_by_priority(&recommendations),
        recommendations,
    }))
}

/// POST /api/v1/team/readiness
///
/// Readiness of every member against their next grade, using each member's latest
/// assessment.
pub async fn handle_team_readiness(
    State(state): State<AppState>,
    Json(request): Json<TeamReadinessRequest>,
) -> Result<Json<TeamReadinessReport>, AppError> {
    let report = summarize_team(&request.members, &state.requirements);
    info!(
        "Team readiness for {} member(s): {} promotion-ready, {} unassessed",
        report.members.len(),
        report.promotion_ready,
        report.unassessed
    );
    Ok(Json(report))
}
