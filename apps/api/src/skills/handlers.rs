//! Axum route handlers for the read-only catalog endpoints.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::skills::{
    CareerGrade, Skill, SkillAssessment, SkillCategory, SkillMap, SkillRequirement,
};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct GradeInfo {
    pub grade: CareerGrade,
    pub slug: String,
    pub label: &'static str,
    pub rank: usize,
    pub next: Option<CareerGrade>,
}

#[derive(Debug, Serialize)]
pub struct SkillInfo {
    pub id: Skill,
    pub label: &'static str,
    pub category: SkillCategory,
}

#[derive(Debug, Serialize)]
pub struct GradeRequirements {
    pub grade: CareerGrade,
    pub label: &'static str,
    pub total_weight: f64,
    pub requirements: SkillMap<SkillRequirement>,
}

/// GET /api/v1/grades
pub async fn handle_list_grades() -> Json<Vec<GradeInfo>> {
    Json(
        CareerGrade::LADDER
            .into_iter()
            .map(|grade| GradeInfo {
                grade,
                slug: grade.slug(),
                label: grade.label(),
                rank: grade.rank(),
                next: grade.next(),
            })
            .collect(),
    )
}

/// GET /api/v1/skills
pub async fn handle_list_skills() -> Json<Vec<SkillInfo>> {
    Json(
        Skill::ALL
            .into_iter()
            .map(|skill| SkillInfo {
                id: skill,
                label: skill.label(),
                category: skill.category(),
            })
            .collect(),
    )
}

/// GET /api/v1/requirements/:grade
///
/// Accepts the snake_case id, the kebab-case slug, or the display label.
pub async fn handle_get_requirements(
    State(state): State<AppState>,
    Path(grade): Path<String>,
) -> Result<Json<GradeRequirements>, AppError> {
    let grade = grade
        .parse::<CareerGrade>()
        .map_err(|e| AppError::NotFound(e.to_string()))?;

    Ok(Json(GradeRequirements {
        grade,
        label: grade.label(),
        total_weight: state.requirements.total_weight(grade),
        requirements: state.requirements.for_grade(grade).clone(),
    }))
}

/// GET /api/v1/assessments/empty
///
/// A blank assessment form: every skill at `not_yet`.
pub async fn handle_empty_assessment() -> Json<SkillAssessment> {
    Json(SkillAssessment::empty())
}
