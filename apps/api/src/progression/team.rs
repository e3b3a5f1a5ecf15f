//! Team readiness: runs the analyzer over every member's latest assessment and rolls
//! the results up for a manager's overview. Each member is analyzed independently.
//!
//! A record is always scored against the grade it was taken at, so a member promoted
//! since their last assessment still shows the readiness that record measured.

use std::cmp::Reverse;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::progression::analyzer::{
    analyze_progression, needs_coaching, readiness_score, ReadinessBand,
};
use crate::skills::{CareerGrade, RequirementTable, Skill, SkillAssessment};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentSource {
    SelfRated,
    Manager,
}

/// A dated snapshot of one member's ratings, taken at `grade`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub assessed_at: DateTime<Utc>,
    pub grade: CareerGrade,
    pub source: AssessmentSource,
    pub skills: SkillAssessment,
    /// Readiness stored when the record was saved.
    #[serde(default)]
    pub readiness_score: Option<u32>,
    #[serde(default)]
    pub notes: String,
}

impl AssessmentRecord {
    /// The stored score, or a fresh one against the record's own grade.
    pub fn readiness(&self, table: &RequirementTable) -> u32 {
        self.readiness_score
            .unwrap_or_else(|| readiness_score(self.grade, &self.skills, table))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: Uuid,
    pub name: String,
    pub current_grade: CareerGrade,
    #[serde(default)]
    pub assessments: Vec<AssessmentRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberStatus {
    Analyzed,
    FullyPromoted,
    Unassessed,
}

impl MemberStatus {
    fn sort_rank(self) -> u8 {
        match self {
            MemberStatus::Analyzed => 0,
            MemberStatus::FullyPromoted => 1,
            MemberStatus::Unassessed => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberReadiness {
    pub member_id: Uuid,
    pub name: String,
    pub current_grade: CareerGrade,
    pub target_grade: Option<CareerGrade>,
    pub status: MemberStatus,
    pub readiness_percentage: Option<u32>,
    pub band: Option<ReadinessBand>,
    pub gap_count: usize,
    pub top_gap: Option<Skill>,
    pub assessed_at: Option<DateTime<Utc>>,
    pub assessed_grade: Option<CareerGrade>,
    /// The latest record predates the member's current grade.
    pub assessed_before_promotion: bool,
    /// Readiness at the assessment before the latest one, for trend display.
    pub previous_readiness: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamReadinessReport {
    pub members: Vec<MemberReadiness>,
    pub average_readiness: Option<f64>,
    pub promotion_ready: usize,
    pub needs_coaching: usize,
    pub unassessed: usize,
    pub fully_promoted: usize,
}

/// Records newest first. Records with the same timestamp keep input order.
pub fn by_recency(records: &[AssessmentRecord]) -> Vec<&AssessmentRecord> {
    let mut dated: Vec<&AssessmentRecord> = records.iter().collect();
    dated.sort_by_key(|r| Reverse(r.assessed_at));
    dated
}

pub fn assess_member(member: &TeamMember, table: &RequirementTable) -> MemberReadiness {
    let mut readiness = MemberReadiness {
        member_id: member.id,
        name: member.name.clone(),
        current_grade: member.current_grade,
        target_grade: member.current_grade.next(),
        status: MemberStatus::Unassessed,
        readiness_percentage: None,
        band: None,
        gap_count: 0,
        top_gap: None,
        assessed_at: None,
        assessed_grade: None,
        assessed_before_promotion: false,
        previous_readiness: None,
    };

    if member.current_grade.is_terminal() {
        readiness.status = MemberStatus::FullyPromoted;
        return readiness;
    }

    let dated = by_recency(&member.assessments);
    let Some(record) = dated.first() else {
        return readiness;
    };
    readiness.assessed_at = Some(record.assessed_at);
    readiness.assessed_grade = Some(record.grade);
    readiness.assessed_before_promotion = record.grade < member.current_grade;
    readiness.previous_readiness = dated.get(1).map(|prev| prev.readiness(table));

    if let Some(result) = analyze_progression(record.grade, &record.skills, table) {
        readiness.status = MemberStatus::Analyzed;
        readiness.target_grade = Some(result.target_grade);
        readiness.readiness_percentage = Some(result.readiness_percentage);
        readiness.band = Some(result.band());
        readiness.gap_count = result.gaps.len();
        readiness.top_gap = result.gaps.first().map(|g| g.skill);
    }
    readiness
}

/// Analyzed members first (highest readiness first, ties in input order), then fully
/// promoted members, then members with no assessment.
pub fn summarize_team(members: &[TeamMember], table: &RequirementTable) -> TeamReadinessReport {
    let mut rows: Vec<MemberReadiness> = members.iter().map(|m| assess_member(m, table)).collect();
    rows.sort_by_key(|r| (r.status.sort_rank(), Reverse(r.readiness_percentage)));

    let scores: Vec<u32> = rows.iter().filter_map(|r| r.readiness_percentage).collect();
    let average_readiness = if scores.is_empty() {
        None
    } else {
        Some(scores.iter().map(|&s| f64::from(s)).sum::<f64>() / scores.len() as f64)
    };

    let count = |status| rows.iter().filter(|r| r.status == status).count();

    TeamReadinessReport {
        average_readiness,
        promotion_ready: rows
            .iter()
            .filter(|r| r.band.is_some_and(ReadinessBand::is_promotion_ready))
            .count(),
        needs_coaching: scores.iter().filter(|&&s| needs_coaching(s)).count(),
        unassessed: count(MemberStatus::Unassessed),
        fully_promoted: count(MemberStatus::FullyPromoted),
        members: rows,
    }
}
