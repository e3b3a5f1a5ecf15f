//! Progression Analyzer: compares an assessment against the next grade's weighted
//! requirements.
//!
//! Algorithm:
//! 1. target = current.next(); the last grade has no target → `None`
//! 2. per skill (soft, then hard): gap = max(0, required_score − current_score)
//! 3. gap > 0 → gaps list, else → strengths list
//! 4. readiness = round(100 × (Σ strength weights + Σ gap partial credit) / Σ weights),
//!    partial credit = weight × current_score / required_score
//! 5. gaps sorted by severity (gap × weight), highest first
//!
//! Rounding: `f64::round` (half away from zero, i.e. half-up for these non-negative
//! values). The gap sort is stable: equal severities keep catalog order.

use serde::{Deserialize, Serialize};

use crate::skills::{
    CareerGrade, ProficiencyLevel, RequirementTable, Skill, SkillAssessment, SkillCategory,
    SkillRequirement,
};

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// Per-skill comparison of current level against the target grade's requirement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GapAnalysisResult {
    pub skill: Skill,
    pub skill_label: &'static str,
    pub category: SkillCategory,
    pub current: ProficiencyLevel,
    pub required: ProficiencyLevel,
    pub gap: u8,
    pub weight: f64,
}

impl GapAnalysisResult {
    pub fn evaluate(
        skill: Skill,
        current: ProficiencyLevel,
        requirement: SkillRequirement,
    ) -> Self {
        GapAnalysisResult {
            skill,
            skill_label: skill.label(),
            category: skill.category(),
            current,
            required: requirement.required,
            gap: requirement.required.score().saturating_sub(current.score()),
            weight: requirement.weight,
        }
    }

    /// gap × weight, the remediation priority key.
    pub fn severity(&self) -> f64 {
        f64::from(self.gap) * self.weight
    }

    pub fn is_gap(&self) -> bool {
        self.gap > 0
    }

    /// Weight earned toward readiness: full weight when met (or when nothing is
    /// required), otherwise weight × current_score / required_score.
    pub fn weighted_credit(&self) -> f64 {
        let required = self.required.score();
        if !self.is_gap() || required == 0 {
            return self.weight;
        }
        self.weight * (f64::from(self.current.score()) / f64::from(required))
    }
}

/// Full progression report for one person.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressionResult {
    pub current_grade: CareerGrade,
    pub target_grade: CareerGrade,
    pub readiness_percentage: u32, // 0 – 100
    pub gaps: Vec<GapAnalysisResult>,      // severity desc
    pub strengths: Vec<GapAnalysisResult>, // catalog order
}

pub const READY_THRESHOLD: u32 = 80;
pub const APPROACHING_THRESHOLD: u32 = 60;
pub const BUILDING_THRESHOLD: u32 = 40;
/// Readiness strictly below this flags a member for coaching.
pub const NEEDS_COACHING_BELOW: u32 = 50;

/// Coarse reading of a readiness percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessBand {
    /// ≥ 80
    Ready,
    /// 60 – 79
    Approaching,
    /// 40 – 59
    Building,
    /// < 40
    EarlyStage,
}

impl ReadinessBand {
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            p if p >= READY_THRESHOLD => ReadinessBand::Ready,
            p if p >= APPROACHING_THRESHOLD => ReadinessBand::Approaching,
            p if p >= BUILDING_THRESHOLD => ReadinessBand::Building,
            _ => ReadinessBand::EarlyStage,
        }
    }

    pub fn is_promotion_ready(self) -> bool {
        self == ReadinessBand::Ready
    }
}

pub fn needs_coaching(percentage: u32) -> bool {
    percentage < NEEDS_COACHING_BELOW
}

impl ProgressionResult {
    pub fn band(&self) -> ReadinessBand {
        ReadinessBand::from_percentage(self.readiness_percentage)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core analysis
// ────────────────────────────────────────────────────────────────────────────

/// Analyzes readiness for the grade after `current_grade`.
///
/// Returns `None` at the top of the ladder: no further progression is possible.
/// Pure; performs no I/O.
pub fn analyze_progression(
    current_grade: CareerGrade,
    assessment: &SkillAssessment,
    table: &RequirementTable,
) -> Option<ProgressionResult> {
    let target_grade = current_grade.next()?;
    let (mut gaps, strengths): (Vec<_>, Vec<_>) = Skill::ALL
        .into_iter()
        .map(|skill| {
            let requirement = table.requirement(target_grade, skill);
            GapAnalysisResult::evaluate(skill, assessment.level(skill), requirement)
        })
        .partition(GapAnalysisResult::is_gap);

    let total_weight: f64 = gaps.iter().chain(&strengths).map(|r| r.weight).sum();
    assert!(
        total_weight > 0.0,
        "requirement table for {target_grade} has no positive weight"
    );

    let achieved_weight: f64 = strengths.iter().map(|s| s.weight).sum();
    let partial_weight: f64 = gaps.iter().map(GapAnalysisResult::weighted_credit).sum();
    let readiness_percentage =
        (100.0 * (achieved_weight + partial_weight) / total_weight).round() as u32;

    sort_by_severity(&mut gaps);

    Some(ProgressionResult {
        current_grade,
        target_grade,
        readiness_percentage,
        gaps,
        strengths,
    })
}

/// Readiness percentage for storing on an assessment record; 0 at the last grade.
pub fn readiness_score(
    current_grade: CareerGrade,
    assessment: &SkillAssessment,
    table: &RequirementTable,
) -> u32 {
    analyze_progression(current_grade, assessment, table)
        .map(|r| r.readiness_percentage)
        .unwrap_or(0)
}

/// Stable sort, highest severity first.
pub fn sort_by_severity(gaps: &mut [GapAnalysisResult]) {
    gaps.sort_by(|a, b| b.severity().total_cmp(&a.severity()));
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    use crate::skills::ProficiencyLevel::{Developing, Expert, NotYet, Proficient};

    fn meets(table: &RequirementTable, grade: CareerGrade) -> SkillAssessment {
        SkillAssessment::from_fn(|skill| table.requirement(grade, skill).required)
    }

    /// Every grade requires Expert; weights come from `weight`.
    fn uniform_table(mut weight: impl FnMut(Skill) -> f64) -> RequirementTable {
        RequirementTable::from_fn(|_, skill| SkillRequirement {
            required: Expert,
            weight: weight(skill),
        })
        .unwrap()
    }

    #[test]
    fn test_terminal_grade_returns_none() {
        let table = RequirementTable::builtin();
        for assessment in [
            SkillAssessment::empty(),
            SkillAssessment::from_fn(|_| Expert),
            SkillAssessment::from_fn(|s| ProficiencyLevel::ALL[s.index() % 4]),
        ] {
            assert!(
                analyze_progression(CareerGrade::EngineeringDivisionHead, &assessment, &table)
                    .is_none()
            );
        }
    }

    #[test]
    fn test_target_is_next_grade() {
        let table = RequirementTable::builtin();
        let result =
            analyze_progression(CareerGrade::Engineer, &SkillAssessment::empty(), &table).unwrap();
        assert_eq!(result.current_grade, CareerGrade::Engineer);
        assert_eq!(result.target_grade, CareerGrade::SeniorEngineer);
    }

    #[test]
    fn test_meeting_every_requirement_is_fully_ready() {
        let table = RequirementTable::builtin();
        for grade in CareerGrade::LADDER {
            let Some(target) = grade.next() else { continue };
            for assessment in [meets(&table, target), SkillAssessment::from_fn(|_| Expert)] {
                let result = analyze_progression(grade, &assessment, &table).unwrap();
                assert_eq!(result.readiness_percentage, 100, "{grade}");
                assert!(result.gaps.is_empty());
                assert_eq!(result.strengths.len(), Skill::COUNT);
            }
        }
    }

    #[test]
    fn test_all_gaps_is_zero_ready() {
        let table = uniform_table(|s| 0.5 + s.index() as f64);
        let result =
            analyze_progression(CareerGrade::SeniorEngineer, &SkillAssessment::empty(), &table)
                .unwrap();
        assert_eq!(result.readiness_percentage, 0);
        assert_eq!(result.gaps.len(), Skill::COUNT);
        assert!(result.strengths.is_empty());
    }

    #[test]
    fn test_senior_to_lead_single_problem_solving_gap() {
        let table = RequirementTable::builtin();
        let assessment = meets(&table, CareerGrade::LeadEngineer)
            .with(Skill::ProblemSolving, Proficient);

        let result = analyze_progression(CareerGrade::SeniorEngineer, &assessment, &table).unwrap();

        assert_eq!(result.target_grade, CareerGrade::LeadEngineer);
        assert_eq!(result.gaps.len(), 1);
        let gap = &result.gaps[0];
        assert_eq!(gap.skill, Skill::ProblemSolving);
        assert_eq!(gap.current, Proficient);
        assert_eq!(gap.required, Expert);
        assert_eq!(gap.gap, 1);
        assert_eq!(gap.weight, 1.5);
        assert_eq!(gap.severity(), 1.5);
        // (11 achieved + 1.5 × 2/3 partial) / 12.5 total = 0.96
        assert_eq!(result.readiness_percentage, 96);
        assert_eq!(result.strengths.len(), Skill::COUNT - 1);
    }

    #[test]
    fn test_partial_credit_is_proportional() {
        let gap = GapAnalysisResult::evaluate(
            Skill::Testing,
            Developing,
            SkillRequirement {
                required: Proficient,
                weight: 1.0,
            },
        );
        assert_eq!(gap.gap, 1);
        assert_eq!(gap.weighted_credit(), 0.5);
    }

    #[test]
    fn test_exceeding_requirement_has_zero_gap() {
        let result = GapAnalysisResult::evaluate(
            Skill::Coding,
            Expert,
            SkillRequirement {
                required: Developing,
                weight: 2.0,
            },
        );
        assert_eq!(result.gap, 0);
        assert!(!result.is_gap());
        assert_eq!(result.weighted_credit(), 2.0);
    }

    #[test]
    fn test_zero_requirement_is_always_a_strength() {
        let table = RequirementTable::builtin();
        // Engineer requires NotYet leadership.
        let result = analyze_progression(
            CareerGrade::AssociateEngineer,
            &SkillAssessment::empty(),
            &table,
        )
        .unwrap();
        let leadership = result
            .strengths
            .iter()
            .find(|s| s.skill == Skill::Leadership)
            .unwrap();
        assert_eq!(leadership.required, NotYet);
        assert_eq!(leadership.gap, 0);
    }

    #[test]
    fn test_gaps_sorted_by_severity_desc() {
        let table = RequirementTable::builtin();
        let result =
            analyze_progression(CareerGrade::SeniorEngineer, &SkillAssessment::empty(), &table)
                .unwrap();
        // Lead: ProblemSolving/Coding/SystemDesign are Expert×1.5 = 4.5 severity.
        assert_eq!(result.gaps[0].severity(), 4.5);
        for pair in result.gaps.windows(2) {
            assert!(pair[0].severity() >= pair[1].severity());
        }
    }

    #[test]
    fn test_distinct_severities_strictly_descending() {
        let table = RequirementTable::builtin();
        // Against Lead: coding gap 3×1.5=4.5, interpersonal gap 1×1=1, security gap 2×1=2.
        let assessment = meets(&table, CareerGrade::LeadEngineer)
            .with(Skill::Interpersonal, Developing)
            .with(Skill::Coding, NotYet)
            .with(Skill::Security, NotYet);
        let result = analyze_progression(CareerGrade::SeniorEngineer, &assessment, &table).unwrap();
        let order: Vec<Skill> = result.gaps.iter().map(|g| g.skill).collect();
        assert_eq!(order, vec![Skill::Coding, Skill::Security, Skill::Interpersonal]);
    }

    #[test]
    fn test_equal_severities_keep_catalog_order() {
        let table = uniform_table(|_| 1.0);
        let assessment = SkillAssessment::from_fn(|_| Expert)
            .with(Skill::Security, Proficient)
            .with(Skill::Interpersonal, Proficient)
            .with(Skill::Devops, Proficient);
        let result = analyze_progression(CareerGrade::Engineer, &assessment, &table).unwrap();
        let order: Vec<Skill> = result.gaps.iter().map(|g| g.skill).collect();
        assert_eq!(order, vec![Skill::Interpersonal, Skill::Devops, Skill::Security]);
    }

    #[test]
    fn test_strengths_keep_catalog_order() {
        let table = RequirementTable::builtin();
        let result = analyze_progression(
            CareerGrade::Engineer,
            &SkillAssessment::from_fn(|_| Expert),
            &table,
        )
        .unwrap();
        let order: Vec<Skill> = result.strengths.iter().map(|s| s.skill).collect();
        assert_eq!(order, Skill::ALL.to_vec());
    }

    #[test]
    fn test_rounding_half_rounds_up() {
        // total 8: coding (1.0) met, the rest (7.0) at zero credit → 12.5%
        let table = uniform_table(|s| match s {
            Skill::Coding => 1.0,
            Skill::Security => 3.0,
            _ => 0.5,
        });
        let assessment = SkillAssessment::empty().with(Skill::Coding, Expert);
        let result = analyze_progression(CareerGrade::Engineer, &assessment, &table).unwrap();
        assert_eq!(table.total_weight(CareerGrade::SeniorEngineer), 8.0);
        assert_eq!(result.readiness_percentage, 13);
    }

    #[test]
    fn test_readiness_is_monotonic_in_each_skill() {
        let table = RequirementTable::builtin();
        for grade in CareerGrade::LADDER.into_iter().filter(|g| !g.is_terminal()) {
            for seed in 0..40usize {
                let base = SkillAssessment::from_fn(|s| {
                    ProficiencyLevel::ALL[(seed * 7 + s.index() * 3 + seed / 3) % 4]
                });
                let before = readiness_score(grade, &base, &table);
                for skill in Skill::ALL {
                    let next = usize::from(base.level(skill).score()) + 1;
                    let Some(&up) = ProficiencyLevel::ALL.get(next) else { continue };
                    let bumped = base.clone().with(skill, up);
                    let after = readiness_score(grade, &bumped, &table);
                    assert!(
                        after >= before,
                        "{grade}: raising {skill} dropped readiness {before} -> {after}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_readiness_stays_within_bounds() {
        let table = RequirementTable::builtin();
        for grade in CareerGrade::LADDER {
            for seed in 0..20usize {
                let assessment =
                    SkillAssessment::from_fn(|s| ProficiencyLevel::ALL[(seed + s.index()) % 4]);
                assert!(readiness_score(grade, &assessment, &table) <= 100);
            }
        }
    }

    #[test]
    fn test_readiness_score_is_zero_at_terminal_grade() {
        let table = RequirementTable::builtin();
        let all_expert = SkillAssessment::from_fn(|_| Expert);
        assert_eq!(
            readiness_score(CareerGrade::EngineeringDivisionHead, &all_expert, &table),
            0
        );
        assert_eq!(readiness_score(CareerGrade::PrincipalEngineer, &all_expert, &table), 100);
    }

    #[test]
    fn test_readiness_band_thresholds() {
        assert_eq!(ReadinessBand::from_percentage(100), ReadinessBand::Ready);
        assert_eq!(ReadinessBand::from_percentage(80), ReadinessBand::Ready);
        assert_eq!(ReadinessBand::from_percentage(79), ReadinessBand::Approaching);
        assert_eq!(ReadinessBand::from_percentage(60), ReadinessBand::Approaching);
        assert_eq!(ReadinessBand::from_percentage(40), ReadinessBand::Building);
        assert_eq!(ReadinessBand::from_percentage(39), ReadinessBand::EarlyStage);
        assert!(ReadinessBand::Ready.is_promotion_ready());
        assert!(!ReadinessBand::Approaching.is_promotion_ready());
    }

    #[test]
    fn test_needs_coaching_below_fifty() {
        assert!(needs_coaching(0));
        assert!(needs_coaching(49));
        assert!(!needs_coaching(50));
        assert!(!needs_coaching(100));
    }
}
