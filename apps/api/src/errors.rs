use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::skills::{CareerGrade, ProficiencyLevel, Skill, SkillCategory};

/// Malformed configuration data: an incomplete requirement or advice table, or a
/// per-skill map that does not cover the catalog. Never a user-facing condition once
/// startup validation has passed.
#[derive(Debug, Error, PartialEq)]
pub enum DataError {
    #[error("Missing entry for skill '{0}'")]
    MissingSkill(Skill),

    #[error("Skill '{0}' listed more than once")]
    DuplicateSkill(Skill),

    #[error("Skill '{skill}' listed under {expected:?} skills but belongs to the other catalog")]
    WrongCategory {
        skill: Skill,
        expected: SkillCategory,
    },

    #[error("Missing requirements for grade '{0}'")]
    MissingGrade(CareerGrade),

    #[error("Invalid weight {weight} for '{skill}' at grade '{grade}': must be finite and > 0")]
    InvalidWeight {
        grade: CareerGrade,
        skill: Skill,
        weight: f64,
    },

    #[error("No remediation advice for '{skill}' at level '{level}'")]
    MissingRemediation {
        skill: Skill,
        level: ProficiencyLevel,
    },
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Data(e) => {
                tracing::error!("Data error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATA_ERROR",
                    "Skill configuration data is incomplete".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
