use std::sync::Arc;

use crate::config::Config;
use crate::skills::{AdviceTable, RequirementTable};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Requirement table, validated at load time. Read-only after startup.
    pub requirements: Arc<RequirementTable>,
    /// Advice table, validated to cover every (skill, level) pair.
    pub advice: Arc<AdviceTable>,
}

impl AppState {
    pub fn new(config: Config, requirements: RequirementTable, advice: AdviceTable) -> Self {
        AppState {
            config,
            requirements: Arc::new(requirements),
            advice: Arc::new(advice),
        }
    }
}
