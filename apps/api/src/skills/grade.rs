use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A rank on the engineering career ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CareerGrade {
    AssociateEngineer,
    Engineer,
    SeniorEngineer,
    LeadEngineer,
    AssociatePrincipalEngineer,
    EngineeringManager,
    PrincipalEngineer,
    EngineeringDivisionHead,
}

#[derive(Debug, Error, PartialEq)]
#[error("Unknown career grade '{0}'")]
pub struct ParseGradeError(pub String);

impl CareerGrade {
    /// The ladder, entry level first.
    pub const LADDER: [CareerGrade; 8] = [
        CareerGrade::AssociateEngineer,
        CareerGrade::Engineer,
        CareerGrade::SeniorEngineer,
        CareerGrade::LeadEngineer,
        CareerGrade::AssociatePrincipalEngineer,
        CareerGrade::EngineeringManager,
        CareerGrade::PrincipalEngineer,
        CareerGrade::EngineeringDivisionHead,
    ];

    /// Zero-based position on the ladder.
    pub const fn rank(self) -> usize {
        match self {
            CareerGrade::AssociateEngineer => 0,
            CareerGrade::Engineer => 1,
            CareerGrade::SeniorEngineer => 2,
            CareerGrade::LeadEngineer => 3,
            CareerGrade::AssociatePrincipalEngineer => 4,
            CareerGrade::EngineeringManager => 5,
            CareerGrade::PrincipalEngineer => 6,
            CareerGrade::EngineeringDivisionHead => 7,
        }
    }

    /// Immediate successor. `None` at the top of the ladder.
    pub fn next(self) -> Option<CareerGrade> {
        Self::LADDER.get(self.rank() + 1).copied()
    }

    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }

    pub const fn label(self) -> &'static str {
        match self {
            CareerGrade::AssociateEngineer => "Associate Engineer",
            CareerGrade::Engineer => "Engineer",
            CareerGrade::SeniorEngineer => "Senior Engineer",
            CareerGrade::LeadEngineer => "Lead Engineer",
            CareerGrade::AssociatePrincipalEngineer => "Associate Principal Engineer",
            CareerGrade::EngineeringManager => "Engineering Manager",
            CareerGrade::PrincipalEngineer => "Principal Engineer",
            CareerGrade::EngineeringDivisionHead => "Engineering Division Head",
        }
    }

    /// URL-friendly form, e.g. `senior-engineer`.
    pub fn slug(self) -> String {
        self.label().to_lowercase().replace(' ', "-")
    }
}

impl PartialOrd for CareerGrade {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CareerGrade {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Display for CareerGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts `senior_engineer`, `senior-engineer` or `Senior Engineer` (any case).
impl FromStr for CareerGrade {
    type Err = ParseGradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '_' | '-' => ' ',
                c => c.to_ascii_lowercase(),
            })
            .collect();

        Self::LADDER
            .iter()
            .copied()
            .find(|g| g.label().to_lowercase() == normalized)
            .ok_or_else(|| ParseGradeError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_is_immediate_successor() {
        assert_eq!(
            CareerGrade::SeniorEngineer.next(),
            Some(CareerGrade::LeadEngineer)
        );
        for pair in CareerGrade::LADDER.windows(2) {
            assert_eq!(pair[0].next(), Some(pair[1]));
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_last_grade_has_no_successor() {
        assert_eq!(CareerGrade::EngineeringDivisionHead.next(), None);
        assert!(CareerGrade::EngineeringDivisionHead.is_terminal());
        let terminal = CareerGrade::LADDER.iter().filter(|g| g.is_terminal()).count();
        assert_eq!(terminal, 1);
    }

    #[test]
    fn test_rank_matches_ladder_position() {
        for (i, grade) in CareerGrade::LADDER.iter().enumerate() {
            assert_eq!(grade.rank(), i);
        }
    }

    #[test]
    fn test_parse_accepts_all_spellings() {
        let expected = CareerGrade::AssociatePrincipalEngineer;
        assert_eq!("associate_principal_engineer".parse::<CareerGrade>(), Ok(expected));
        assert_eq!("associate-principal-engineer".parse::<CareerGrade>(), Ok(expected));
        assert_eq!("Associate Principal Engineer".parse::<CareerGrade>(), Ok(expected));
        assert_eq!(" LEAD-ENGINEER ".parse::<CareerGrade>(), Ok(CareerGrade::LeadEngineer));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "chief wizard".parse::<CareerGrade>().unwrap_err();
        assert_eq!(err, ParseGradeError("chief wizard".to_string()));
    }

    #[test]
    fn test_slug_round_trips() {
        for grade in CareerGrade::LADDER {
            assert_eq!(grade.slug().parse::<CareerGrade>(), Ok(grade));
        }
        assert_eq!(CareerGrade::SeniorEngineer.slug(), "senior-engineer");
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&CareerGrade::EngineeringManager).unwrap();
        assert_eq!(json, "\"engineering_manager\"");
    }
}
