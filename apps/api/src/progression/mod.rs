// Progression engine: gap analysis against the next grade, learning-path generation,
// and team-level readiness roll-ups. Engine functions are pure; tables are passed in.

pub mod analyzer;
pub mod handlers;
pub mod learning_path;
pub mod team;
