// Skill domain: proficiency scale, career ladder, skill catalog, and the static
// requirement / advice tables the progression engine reads.

pub mod advice;
pub mod assessment;
pub mod catalog;
pub mod grade;
pub mod handlers;
pub mod proficiency;
pub mod requirements;
pub mod source;

pub use advice::AdviceTable;
pub use assessment::SkillAssessment;
pub use catalog::{Skill, SkillCategory, SkillMap};
pub use grade::CareerGrade;
pub use proficiency::ProficiencyLevel;
pub use requirements::{RequirementTable, SkillRequirement};
