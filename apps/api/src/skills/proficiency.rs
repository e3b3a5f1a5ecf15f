use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordinal self/manager rating of a single skill.
///
/// Ordering is defined by `score()`, never by declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProficiencyLevel {
    NotYet,
    Developing,
    Proficient,
    Expert,
}

impl ProficiencyLevel {
    /// All levels, lowest score first.
    pub const ALL: [ProficiencyLevel; 4] = [
        ProficiencyLevel::NotYet,
        ProficiencyLevel::Developing,
        ProficiencyLevel::Proficient,
        ProficiencyLevel::Expert,
    ];

    /// Fixed integer score: NotYet=0, Developing=1, Proficient=2, Expert=3.
    pub const fn score(self) -> u8 {
        match self {
            ProficiencyLevel::NotYet => 0,
            ProficiencyLevel::Developing => 1,
            ProficiencyLevel::Proficient => 2,
            ProficiencyLevel::Expert => 3,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ProficiencyLevel::NotYet => "Not Yet",
            ProficiencyLevel::Developing => "Developing",
            ProficiencyLevel::Proficient => "Proficient",
            ProficiencyLevel::Expert => "Expert",
        }
    }
}

impl PartialOrd for ProficiencyLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ProficiencyLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score().cmp(&other.score())
    }
}

impl fmt::Display for ProficiencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
