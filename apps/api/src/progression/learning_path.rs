//! Learning Path Generator: turns a gap list into prioritized remediation steps.
//!
//! Missing advice for a (skill, level) pair is a data-table bug and fails the whole
//! call with `DataError::MissingRemediation`; no generic text is substituted.

use serde::{Deserialize, Serialize};

use crate::errors::DataError;
use crate::progression::analyzer::{sort_by_severity, GapAnalysisResult};
use crate::skills::{AdviceTable, ProficiencyLevel, Skill};

pub const DEFAULT_HIGH_THRESHOLD: f64 = 3.0;
pub const DEFAULT_MEDIUM_THRESHOLD: f64 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// Severity cut-offs for priority buckets. Inclusive lower bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriorityThresholds {
    pub high: f64,
    pub medium: f64,
}

impl Default for PriorityThresholds {
    fn default() -> Self {
        Self {
            high: DEFAULT_HIGH_THRESHOLD,
            medium: DEFAULT_MEDIUM_THRESHOLD,
        }
    }
}

impl PriorityThresholds {
    pub fn classify(&self, severity: f64) -> Priority {
        if severity >= self.high {
            Priority::High
        } else if severity >= self.medium {
            Priority::Medium
        } else {
            Priority::Low
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LearningRecommendation {
    pub skill: Skill,
    pub skill_label: &'static str,
    pub current_level: ProficiencyLevel,
    pub target_level: ProficiencyLevel,
    pub priority: Priority,
    pub recommendations: Vec<String>,
}

/// One recommendation per gap, highest severity first.
///
/// Re-sorts its input: callers may pass gaps from anywhere, not only from
/// `analyze_progression`. Actions come from the advice for the *current* level.
pub fn generate_learning_path(
    gaps: &[GapAnalysisResult],
    advice: &AdviceTable,
    thresholds: &PriorityThresholds,
) -> Result<Vec<LearningRecommendation>, DataError> {
    let mut ordered = gaps.to_vec();
    sort_by_severity(&mut ordered);

    ordered
        .into_iter()
        .map(|gap| -> Result<LearningRecommendation, DataError> {
            let actions = advice.actions(gap.skill, gap.current).ok_or(
                DataError::MissingRemediation {
                    skill: gap.skill,
                    level: gap.current,
                },
            )?;

            Ok(LearningRecommendation {
                skill: gap.skill,
                skill_label: gap.skill_label,
                current_level: gap.current,
                target_level: gap.required,
                priority: thresholds.classify(gap.severity()),
                recommendations: actions.to_vec(),
            })
        })
        .collect()
}

/// Recommendations bucketed by priority, order preserved within each bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PriorityGroups {
    pub high: Vec<LearningRecommendation>,
    pub medium: Vec<LearningRecommendation>,
    pub low: Vec<LearningRecommendation>,
}

pub fn group_by_priority(recommendations: &[LearningRecommendation]) -> PriorityGroups {
    let mut groups = PriorityGroups::default();
    for rec in recommendations {
        let bucket = match rec.priority {
            Priority::High => &mut groups.high,
            Priority::Medium => &mut groups.medium,
            Priority::Low => &mut groups.low,
        };
        bucket.push(rec.clone());
    }
    groups
}
