//! Grade requirement table: for every career grade, the required proficiency level and
//! importance weight of every skill.
//!
//! Invariant: every weight is finite and > 0, so each grade's total weight is positive.
//! The progression analyzer divides by that total and relies on this invariant; it is
//! checked whenever a table is constructed from external data.

use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::DataError;
use crate::skills::catalog::{Skill, SkillMap};
use crate::skills::grade::CareerGrade;
use crate::skills::proficiency::ProficiencyLevel;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkillRequirement {
    pub required: ProficiencyLevel,
    pub weight: f64,
}

const fn req(required: ProficiencyLevel, weight: f64) -> SkillRequirement {
    SkillRequirement { required, weight }
}

/// Requirement set for every (grade, skill) cell.
#[derive(Debug, Clone, PartialEq)]
pub struct RequirementTable {
    levels: Vec<SkillMap<SkillRequirement>>, // indexed by CareerGrade::rank()
}

impl RequirementTable {
    /// Builds a table from a cell function and validates every weight. Fixture builder.
    #[cfg(test)]
    pub fn from_fn(
        mut f: impl FnMut(CareerGrade, Skill) -> SkillRequirement,
    ) -> Result<Self, DataError> {
        let table = RequirementTable {
            levels: CareerGrade::LADDER
                .into_iter()
                .map(|grade| SkillMap::from_fn(|skill| f(grade, skill)))
                .collect(),
        };
        table.validate()?;
        Ok(table)
    }

    /// Production requirements, per the engineering competency ladder.
    pub fn builtin() -> Self {
        RequirementTable {
            levels: CareerGrade::LADDER
                .into_iter()
                .map(|grade| SkillMap::from_fn(|skill| builtin_requirement(grade, skill)))
                .collect(),
        }
    }

    pub fn validate(&self) -> Result<(), DataError> {
        for grade in CareerGrade::LADDER {
            for (skill, requirement) in self.for_grade(grade).iter() {
                if !requirement.weight.is_finite() || requirement.weight <= 0.0 {
                    return Err(DataError::InvalidWeight {
                        grade,
                        skill,
                        weight: requirement.weight,
                    });
                }
            }
        }
        Ok(())
    }

    pub fn for_grade(&self, grade: CareerGrade) -> &SkillMap<SkillRequirement> {
        &self.levels[grade.rank()]
    }

    pub fn requirement(&self, grade: CareerGrade, skill: Skill) -> SkillRequirement {
        self.for_grade(grade)[skill]
    }

    pub fn total_weight(&self, grade: CareerGrade) -> f64 {
        self.for_grade(grade).iter().map(|(_, r)| r.weight).sum()
    }
}

impl Default for RequirementTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Serialize for RequirementTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        CareerGrade::LADDER
            .into_iter()
            .map(|grade| (grade, self.for_grade(grade)))
            .collect::<BTreeMap<_, _>>()
            .serialize(serializer)
    }
}

/// JSON form: `{ "<grade>": { "soft_skills": {..}, "hard_skills": {..} }, .. }`.
impl<'de> Deserialize<'de> for RequirementTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut raw =
            BTreeMap::<CareerGrade, SkillMap<SkillRequirement>>::deserialize(deserializer)?;

        let levels = CareerGrade::LADDER
            .into_iter()
            .map(|grade| raw.remove(&grade).ok_or(DataError::MissingGrade(grade)))
            .collect::<Result<Vec<_>, DataError>>()
            .map_err(D::Error::custom)?;

        let table = RequirementTable { levels };
        table.validate().map_err(D::Error::custom)?;
        Ok(table)
    }
}

fn builtin_requirement(grade: CareerGrade, skill: Skill) -> SkillRequirement {
    use CareerGrade as G;
    use ProficiencyLevel::{Developing, Expert, NotYet, Proficient};
    use Skill as S;

    match grade {
        G::AssociateEngineer => match skill {
            S::Interpersonal => req(Developing, 1.0),
            S::ProjectManagement => req(NotYet, 0.5),
            S::ProblemSolving => req(NotYet, 0.5),
            S::Leadership => req(NotYet, 0.5),
            S::Coding => req(Developing, 1.5),
            S::SystemDesign => req(NotYet, 0.5),
            S::Devops => req(NotYet, 0.5),
            S::Testing => req(Developing, 1.0),
            S::Databases => req(NotYet, 0.5),
            S::Security => req(NotYet, 0.5),
        },
        G::Engineer => match skill {
            S::Interpersonal => req(Developing, 1.0),
            S::ProjectManagement => req(Developing, 1.0),
            S::ProblemSolving => req(Developing, 1.0),
            S::Leadership => req(NotYet, 0.5),
            S::Coding => req(Proficient, 1.5),
            S::SystemDesign => req(Developing, 1.0),
            S::Devops => req(Developing, 1.0),
            S::Testing => req(Proficient, 1.0),
            S::Databases => req(Developing, 1.0),
            S::Security => req(Developing, 0.5),
        },
        G::SeniorEngineer => match skill {
            S::Interpersonal => req(Proficient, 1.0),
            S::ProjectManagement => req(Proficient, 1.0),
            S::ProblemSolving => req(Proficient, 1.5),
            S::Leadership => req(Developing, 1.0),
            S::Coding => req(Expert, 1.5),
            S::SystemDesign => req(Proficient, 1.5),
            S::Devops => req(Proficient, 1.0),
            S::Testing => req(Proficient, 1.0),
            S::Databases => req(Proficient, 1.0),
            S::Security => req(Developing, 1.0),
        },
        G::LeadEngineer => match skill {
            S::Interpersonal => req(Proficient, 1.0),
            S::ProjectManagement => req(Proficient, 1.5),
            S::ProblemSolving => req(Expert, 1.5),
            S::Leadership => req(Proficient, 1.5),
            S::Coding => req(Expert, 1.5),
            S::SystemDesign => req(Expert, 1.5),
            S::Devops => req(Proficient, 1.0),
            S::Testing => req(Proficient, 1.0),
            S::Databases => req(Proficient, 1.0),
            S::Security => req(Proficient, 1.0),
        },
        G::AssociatePrincipalEngineer => match skill {
            S::Interpersonal => req(Expert, 1.0),
            S::ProjectManagement => req(Expert, 1.5),
            S::ProblemSolving => req(Expert, 1.5),
            S::Leadership => req(Proficient, 1.5),
            S::Coding => req(Expert, 1.5),
            S::SystemDesign => req(Expert, 2.0),
            S::Devops => req(Proficient, 1.0),
            S::Testing => req(Expert, 1.0),
            S::Databases => req(Expert, 1.0),
            S::Security => req(Proficient, 1.0),
        },
        G::EngineeringManager => match skill {
            S::Interpersonal => req(Expert, 1.5),
            S::ProjectManagement => req(Expert, 2.0),
            S::ProblemSolving => req(Proficient, 1.0),
            S::Leadership => req(Expert, 2.0),
            S::Coding => req(Proficient, 1.0),
            S::SystemDesign => req(Proficient, 1.5),
            S::Devops => req(Proficient, 1.0),
            S::Testing => req(Proficient, 1.0),
            S::Databases => req(Proficient, 1.0),
            S::Security => req(Proficient, 1.0),
        },
        G::PrincipalEngineer => match skill {
            S::Interpersonal => req(Expert, 1.0),
            S::ProjectManagement => req(Expert, 1.0),
            S::ProblemSolving => req(Expert, 2.0),
            S::Leadership => req(Expert, 1.5),
            S::Coding => req(Expert, 1.5),
            S::SystemDesign => req(Expert, 2.0),
            S::Devops => req(Expert, 1.5),
            S::Testing => req(Expert, 1.0),
            S::Databases => req(Expert, 1.5),
            S::Security => req(Expert, 1.5),
        },
        G::EngineeringDivisionHead => match skill {
            S::Interpersonal => req(Expert, 2.0),
            S::ProjectManagement => req(Expert, 2.0),
            S::ProblemSolving => req(Expert, 1.5),
            S::Leadership => req(Expert, 2.0),
            S::Coding => req(Proficient, 0.5),
            S::SystemDesign => req(Expert, 2.0),
            S::Devops => req(Proficient, 1.0),
            S::Testing => req(Proficient, 0.5),
            S::Databases => req(Proficient, 1.0),
            S::Security => req(Proficient, 1.5),
        },
    }
}
