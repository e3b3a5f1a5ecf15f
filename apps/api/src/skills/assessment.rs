use serde::{Deserialize, Serialize};

use crate::skills::catalog::{Skill, SkillMap};
use crate::skills::proficiency::ProficiencyLevel;

/// One person's self- or manager-rated level for every skill in both catalogs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillAssessment(SkillMap<ProficiencyLevel>);

impl SkillAssessment {
    /// Every skill at `NotYet`.
    pub fn empty() -> Self {
        Self::from_fn(|_| ProficiencyLevel::NotYet)
    }

    pub fn from_fn(f: impl FnMut(Skill) -> ProficiencyLevel) -> Self {
        SkillAssessment(SkillMap::from_fn(f))
    }

    pub fn level(&self, skill: Skill) -> ProficiencyLevel {
        self.0[skill]
    }

    /// Updates a single skill, the way the rating UI mutates an assessment.
    #[allow(dead_code)]
    pub fn set(&mut self, skill: Skill, level: ProficiencyLevel) {
        self.0[skill] = level;
    }

    /// Fixture builder.
    #[cfg(test)]
    pub fn with(mut self, skill: Skill, level: ProficiencyLevel) -> Self {
        self.set(skill, level);
        self
    }
}

impl Default for SkillAssessment {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_assessment_is_all_not_yet() {
        let assessment = SkillAssessment::empty();
        for skill in Skill::ALL {
            assert_eq!(assessment.level(skill), ProficiencyLevel::NotYet);
        }
    }

    #[test]
    fn test_set_changes_one_skill() {
        let mut assessment = SkillAssessment::empty();
        assessment.set(Skill::Coding, ProficiencyLevel::Expert);
        assert_eq!(assessment.level(Skill::Coding), ProficiencyLevel::Expert);
        let changed = Skill::ALL
            .iter()
            .filter(|s| assessment.level(**s) != ProficiencyLevel::NotYet)
            .count();
        assert_eq!(changed, 1);
    }

    #[test]
    fn test_wire_format() {
        let assessment =
            SkillAssessment::empty().with(Skill::Leadership, ProficiencyLevel::Developing);
        let value = serde_json::to_value(&assessment).unwrap();
        assert_eq!(value["soft_skills"]["leadership"], json!("developing"));
        assert_eq!(value["hard_skills"]["coding"], json!("not_yet"));
    }

    #[test]
    fn test_partial_assessment_is_rejected() {
        let body = json!({
            "soft_skills": { "interpersonal": "expert" },
            "hard_skills": {}
        });
        assert!(serde_json::from_value::<SkillAssessment>(body).is_err());
    }
}
