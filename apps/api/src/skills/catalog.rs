//! Skill catalog: the soft and hard skill identifiers, and `SkillMap`, the total
//! per-skill map every assessment, requirement set and report is built on.

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

use serde::de::{Error as _, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::DataError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Soft,
    Hard,
}

/// A skill from one of the two disjoint catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Skill {
    // Soft
    Interpersonal,
    ProjectManagement,
    ProblemSolving,
    Leadership,
    // Hard
    Coding,
    SystemDesign,
    Devops,
    Testing,
    Databases,
    Security,
}

impl Skill {
    pub const SOFT: [Skill; 4] = [
        Skill::Interpersonal,
        Skill::ProjectManagement,
        Skill::ProblemSolving,
        Skill::Leadership,
    ];

    pub const HARD: [Skill; 6] = [
        Skill::Coding,
        Skill::SystemDesign,
        Skill::Devops,
        Skill::Testing,
        Skill::Databases,
        Skill::Security,
    ];

    /// Catalog order: soft skills, then hard skills.
    pub const ALL: [Skill; 10] = [
        Skill::Interpersonal,
        Skill::ProjectManagement,
        Skill::ProblemSolving,
        Skill::Leadership,
        Skill::Coding,
        Skill::SystemDesign,
        Skill::Devops,
        Skill::Testing,
        Skill::Databases,
        Skill::Security,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub const fn category(self) -> SkillCategory {
        match self {
            Skill::Interpersonal
            | Skill::ProjectManagement
            | Skill::ProblemSolving
            | Skill::Leadership => SkillCategory::Soft,
            Skill::Coding
            | Skill::SystemDesign
            | Skill::Devops
            | Skill::Testing
            | Skill::Databases
            | Skill::Security => SkillCategory::Hard,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Skill::Interpersonal => "Interpersonal Skills",
            Skill::ProjectManagement => "Project Management",
            Skill::ProblemSolving => "Problem Solving & Decision Making",
            Skill::Leadership => "Leadership",
            Skill::Coding => "Coding & Programming",
            Skill::SystemDesign => "System Design & Architecture",
            Skill::Devops => "DevOps & Infrastructure",
            Skill::Testing => "Testing & Quality",
            Skill::Databases => "Data & Databases",
            Skill::Security => "Security",
        }
    }

    /// Stable wire identifier, e.g. `problem_solving`.
    pub const fn id(self) -> &'static str {
        match self {
            Skill::Interpersonal => "interpersonal",
            Skill::ProjectManagement => "project_management",
            Skill::ProblemSolving => "problem_solving",
            Skill::Leadership => "leadership",
            Skill::Coding => "coding",
            Skill::SystemDesign => "system_design",
            Skill::Devops => "devops",
            Skill::Testing => "testing",
            Skill::Databases => "databases",
            Skill::Security => "security",
        }
    }

    /// Position in `Skill::ALL`.
    pub const fn index(self) -> usize {
        match self {
            Skill::Interpersonal => 0,
            Skill::ProjectManagement => 1,
            Skill::ProblemSolving => 2,
            Skill::Leadership => 3,
            Skill::Coding => 4,
            Skill::SystemDesign => 5,
            Skill::Devops => 6,
            Skill::Testing => 7,
            Skill::Databases => 8,
            Skill::Security => 9,
        }
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// SkillMap
// ────────────────────────────────────────────────────────────────────────────

/// A value for every skill in both catalogs. There is no partially populated state:
/// a `SkillMap` is only built by `from_fn` or by validated deserialization.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillMap<T> {
    values: Vec<T>, // len == Skill::COUNT, indexed by Skill::index()
}

impl<T> SkillMap<T> {
    pub fn from_fn(f: impl FnMut(Skill) -> T) -> Self {
        SkillMap {
            values: Skill::ALL.into_iter().map(f).collect(),
        }
    }

    /// Iterates in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (Skill, &T)> {
        Skill::ALL.into_iter().zip(self.values.iter())
    }

    /// Builds a total map from the categorized wire form, rejecting missing, repeated
    /// and miscategorized skills.
    fn from_categorized(wire: Categorized<T>) -> Result<Self, DataError> {
        let mut slots: Vec<Option<T>> =
            std::iter::repeat_with(|| None).take(Skill::COUNT).collect();

        for (expected, Entries(entries)) in [
            (SkillCategory::Soft, wire.soft_skills),
            (SkillCategory::Hard, wire.hard_skills),
        ] {
            for (skill, value) in entries {
                if skill.category() != expected {
                    return Err(DataError::WrongCategory { skill, expected });
                }
                if slots[skill.index()].replace(value).is_some() {
                    return Err(DataError::DuplicateSkill(skill));
                }
            }
        }

        let values = Skill::ALL
            .into_iter()
            .zip(slots)
            .map(|(skill, slot)| slot.ok_or(DataError::MissingSkill(skill)))
            .collect::<Result<Vec<T>, DataError>>()?;

        Ok(SkillMap { values })
    }
}

impl<T> Index<Skill> for SkillMap<T> {
    type Output = T;

    fn index(&self, skill: Skill) -> &T {
        &self.values[skill.index()]
    }
}

impl<T> IndexMut<Skill> for SkillMap<T> {
    fn index_mut(&mut self, skill: Skill) -> &mut T {
        &mut self.values[skill.index()]
    }
}

/// Wire form: `{ "soft_skills": { .. }, "hard_skills": { .. } }`.
#[derive(Deserialize)]
struct Categorized<T> {
    soft_skills: Entries<T>,
    hard_skills: Entries<T>,
}

/// One category's entries in input order. Unlike a map, repeated keys survive so they
/// can be rejected.
struct Entries<T>(Vec<(Skill, T)>);

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Entries<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for EntriesVisitor<T> {
            type Value = Entries<T>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map from skill id to value")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Entries<T>, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<Skill, T>()? {
                    entries.push(entry);
                }
                Ok(Entries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

#[derive(Serialize)]
struct CategorizedRef<'a, T> {
    soft_skills: BTreeMap<Skill, &'a T>,
    hard_skills: BTreeMap<Skill, &'a T>,
}

impl<T: Serialize> Serialize for SkillMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let pick = |skills: &[Skill]| {
            skills
                .iter()
                .map(|&skill| (skill, &self[skill]))
                .collect::<BTreeMap<Skill, &T>>()
        };
        CategorizedRef {
            soft_skills: pick(&Skill::SOFT),
            hard_skills: pick(&Skill::HARD),
        }
        .serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for SkillMap<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = Categorized::<T>::deserialize(deserializer)?;
        SkillMap::from_categorized(wire).map_err(D::Error::custom)
    }
}
