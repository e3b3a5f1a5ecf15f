//! Remediation advice: curated next-step actions per (skill, current level).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::DataError;
use crate::skills::catalog::Skill;
use crate::skills::proficiency::ProficiencyLevel;

/// Ordered remediation actions keyed by skill, then by the learner's current level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdviceTable {
    entries: BTreeMap<Skill, BTreeMap<ProficiencyLevel, Vec<String>>>,
}

impl AdviceTable {
    /// Unvalidated constructor, intended for fixtures. Production tables go through
    /// `validate()` at startup.
    pub fn from_entries(
        entries: impl IntoIterator<Item = ((Skill, ProficiencyLevel), Vec<String>)>,
    ) -> Self {
        let mut table = AdviceTable::default();
        for ((skill, level), actions) in entries {
            table.entries.entry(skill).or_default().insert(level, actions);
        }
        table
    }

    pub fn builtin() -> Self {
        Self::from_entries(Skill::ALL.into_iter().flat_map(|skill| {
            ProficiencyLevel::ALL.into_iter().map(move |level| {
                let actions = builtin_actions(skill, level)
                    .iter()
                    .map(|a| a.to_string())
                    .collect();
                ((skill, level), actions)
            })
        }))
    }

    /// The actions for a cell, or `None` when the cell is absent or empty.
    pub fn actions(&self, skill: Skill, level: ProficiencyLevel) -> Option<&[String]> {
        self.entries
            .get(&skill)
            .and_then(|levels| levels.get(&level))
            .map(Vec::as_slice)
            .filter(|actions| !actions.is_empty())
    }

    /// Every (skill, level) pair must have at least one action.
    pub fn validate(&self) -> Result<(), DataError> {
        for skill in Skill::ALL {
            for level in ProficiencyLevel::ALL {
                if self.actions(skill, level).is_none() {
                    return Err(DataError::MissingRemediation { skill, level });
                }
            }
        }
        Ok(())
    }
}

fn builtin_actions(skill: Skill, level: ProficiencyLevel) -> &'static [&'static str] {
    use ProficiencyLevel::{Developing, Expert, NotYet, Proficient};
    use Skill as S;

    match (skill, level) {
        (S::Interpersonal, NotYet) => &[
            "Practice active listening in team meetings",
            "Seek feedback from peers on communication style",
            "Join cross-team collaboration initiatives",
        ],
        (S::Interpersonal, Developing) => &[
            "Lead small team discussions or presentations",
            "Mentor junior team members informally",
            "Practice giving constructive feedback",
        ],
        (S::Interpersonal, Proficient) => &[
            "Facilitate workshops or knowledge sharing sessions",
            "Resolve conflicts within team settings",
            "Build relationships across departments",
        ],
        (S::Interpersonal, Expert) => &[
            "Coach others on communication skills",
            "Lead organizational culture initiatives",
            "Represent team in cross-org discussions",
        ],

        (S::ProjectManagement, NotYet) => &[
            "Learn basic project management concepts (Agile/Scrum)",
            "Use task tracking tools effectively (JIRA, Trello)",
            "Understand sprint planning and estimation",
        ],
        (S::ProjectManagement, Developing) => &[
            "Lead small feature deliveries end-to-end",
            "Practice story writing and task breakdown",
            "Track and communicate project status regularly",
        ],
        (S::ProjectManagement, Proficient) => &[
            "Manage medium-sized projects independently",
            "Handle dependencies and stakeholder communication",
            "Implement process improvements",
        ],
        (S::ProjectManagement, Expert) => &[
            "Lead cross-team project coordination",
            "Define project management standards",
            "Coach others on delivery practices",
        ],

        (S::ProblemSolving, NotYet) => &[
            "Practice structured debugging approaches",
            "Learn root cause analysis techniques",
            "Study common design patterns and solutions",
        ],
        (S::ProblemSolving, Developing) => &[
            "Lead technical investigations and RCAs",
            "Document problem-solving approaches",
            "Propose solutions with trade-off analysis",
        ],
        (S::ProblemSolving, Proficient) => &[
            "Solve ambiguous problems with multiple stakeholders",
            "Make data-driven technical decisions",
            "Design solutions for complex requirements",
        ],
        (S::ProblemSolving, Expert) => &[
            "Define problem-solving frameworks for the org",
            "Lead architectural decision making",
            "Mentor others on analytical thinking",
        ],

        (S::Leadership, NotYet) => &[
            "Take ownership of small tasks or features",
            "Help onboard new team members",
            "Participate actively in team discussions",
        ],
        (S::Leadership, Developing) => &[
            "Lead small initiatives or improvements",
            "Mentor junior developers",
            "Drive code review culture",
        ],
        (S::Leadership, Proficient) => &[
            "Lead project teams and technical directions",
            "Influence technical decisions beyond your team",
            "Develop talent through coaching",
        ],
        (S::Leadership, Expert) => &[
            "Shape engineering culture and practices",
            "Lead strategic technical initiatives",
            "Build and develop high-performing teams",
        ],

        (S::Coding, NotYet) => &[
            "Complete online coding courses (JavaScript, Python, etc.)",
            "Practice coding problems on LeetCode/HackerRank",
            "Contribute to simple bug fixes",
        ],
        (S::Coding, Developing) => &[
            "Write production code with guidance",
            "Learn and apply clean code principles",
            "Participate actively in code reviews",
        ],
        (S::Coding, Proficient) => &[
            "Implement complex features independently",
            "Lead code quality improvements",
            "Master multiple programming paradigms",
        ],
        (S::Coding, Expert) => &[
            "Define coding standards for the organization",
            "Optimize critical system components",
            "Architect reusable libraries and frameworks",
        ],

        (S::SystemDesign, NotYet) => &[
            "Study system design fundamentals (CAP, scaling)",
            "Understand existing system architectures",
            "Learn about microservices vs monoliths",
        ],
        (S::SystemDesign, Developing) => &[
            "Design small services with guidance",
            "Document technical designs (LLD)",
            "Understand API design principles",
        ],
        (S::SystemDesign, Proficient) => &[
            "Design scalable systems independently",
            "Create high-level and low-level designs",
            "Lead design reviews",
        ],
        (S::SystemDesign, Expert) => &[
            "Define architectural standards",
            "Design organization-wide platforms",
            "Lead technical due diligence",
        ],

        (S::Devops, NotYet) => &[
            "Learn CI/CD concepts and tools",
            "Understand containerization (Docker basics)",
            "Study cloud fundamentals (AWS/GCP)",
        ],
        (S::Devops, Developing) => &[
            "Configure and maintain CI/CD pipelines",
            "Deploy applications to cloud environments",
            "Monitor applications and respond to alerts",
        ],
        (S::Devops, Proficient) => &[
            "Design deployment strategies",
            "Implement infrastructure as code",
            "Optimize cloud costs and performance",
        ],
        (S::Devops, Expert) => &[
            "Define DevOps practices for the org",
            "Architect multi-region deployments",
            "Lead platform engineering initiatives",
        ],

        (S::Testing, NotYet) => &[
            "Learn unit testing fundamentals",
            "Understand test pyramid concepts",
            "Write basic unit tests",
        ],
        (S::Testing, Developing) => &[
            "Write comprehensive unit and integration tests",
            "Understand TDD practices",
            "Debug test failures effectively",
        ],
        (S::Testing, Proficient) => &[
            "Design testing strategies for projects",
            "Implement E2E testing frameworks",
            "Lead quality improvements",
        ],
        (S::Testing, Expert) => &[
            "Define testing standards for the org",
            "Architect automated testing platforms",
            "Coach others on testing best practices",
        ],

        (S::Databases, NotYet) => &[
            "Learn SQL fundamentals",
            "Understand RDBMS vs NoSQL",
            "Practice basic query optimization",
        ],
        (S::Databases, Developing) => &[
            "Design database schemas",
            "Write efficient queries",
            "Understand indexing and transactions",
        ],
        (S::Databases, Proficient) => &[
            "Optimize database performance",
            "Design data models for scale",
            "Handle data migrations safely",
        ],
        (S::Databases, Expert) => &[
            "Architect data platforms",
            "Define data governance standards",
            "Lead database technology decisions",
        ],

        (S::Security, NotYet) => &[
            "Learn OWASP Top 10 vulnerabilities",
            "Understand authentication concepts",
            "Practice secure coding basics",
        ],
        (S::Security, Developing) => &[
            "Implement secure authentication flows",
            "Conduct basic security reviews",
            "Handle sensitive data properly",
        ],
        (S::Security, Proficient) => &[
            "Design secure systems",
            "Lead security audits and fixes",
            "Implement encryption and access controls",
        ],
        (S::Security, Expert) => &[
            "Define security architecture standards",
            "Lead security incident response",
            "Coach others on secure development",
        ],
    }
}
