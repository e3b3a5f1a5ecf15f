//! Table sources: pluggable loaders for the requirement and advice tables.
//!
//! Default: `BuiltinTables` (compiled-in data).
//! `JsonFileTables` reads JSON overrides from disk and falls back to the builtin table
//! for any path that is not configured.
//!
//! Tables are loaded once at startup and held in `AppState`; the engine functions take
//! them as explicit arguments.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::info;

use crate::config::Config;
use crate::skills::advice::AdviceTable;
use crate::skills::requirements::RequirementTable;

#[async_trait]
pub trait TableSource: Send + Sync {
    async fn load_requirements(&self) -> Result<RequirementTable>;

    async fn load_advice(&self) -> Result<AdviceTable>;

    /// Short name for startup logging.
    fn describe(&self) -> String;
}

/// Compiled-in production tables.
pub struct BuiltinTables;

#[async_trait]
impl TableSource for BuiltinTables {
    async fn load_requirements(&self) -> Result<RequirementTable> {
        Ok(RequirementTable::builtin())
    }

    async fn load_advice(&self) -> Result<AdviceTable> {
        Ok(AdviceTable::builtin())
    }

    fn describe(&self) -> String {
        "builtin".to_string()
    }
}

/// JSON overrides on disk. A `None` path keeps the builtin table for that half.
pub struct JsonFileTables {
    pub requirements_path: Option<PathBuf>,
    pub advice_path: Option<PathBuf>,
}

#[async_trait]
impl TableSource for JsonFileTables {
    async fn load_requirements(&self) -> Result<RequirementTable> {
        match &self.requirements_path {
            // Deserialization validates grade/skill coverage and weights.
            Some(path) => read_json(path).await,
            None => Ok(RequirementTable::builtin()),
        }
    }

    async fn load_advice(&self) -> Result<AdviceTable> {
        let table: AdviceTable = match &self.advice_path {
            Some(path) => read_json(path).await?,
            None => return Ok(AdviceTable::builtin()),
        };
        table
            .validate()
            .context("Advice table must cover every skill and level")?;
        Ok(table)
    }

    fn describe(&self) -> String {
        let show = |p: &Option<PathBuf>| {
            p.as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "builtin".to_string())
        };
        format!(
            "requirements={} advice={}",
            show(&self.requirements_path),
            show(&self.advice_path)
        )
    }
}

/// Picks the source implied by the configuration.
pub fn source_from_config(config: &Config) -> Box<dyn TableSource> {
    if config.requirements_path.is_none() && config.advice_path.is_none() {
        Box::new(BuiltinTables)
    } else {
        Box::new(JsonFileTables {
            requirements_path: config.requirements_path.clone(),
            advice_path: config.advice_path.clone(),
        })
    }
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read table file '{}'", path.display()))?;
    let parsed = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid table file '{}'", path.display()))?;
    info!("Loaded table override from {}", path.display());
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use crate::skills::{CareerGrade, ProficiencyLevel, Skill};

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_builtin_source_loads_valid_tables() {
        let requirements = BuiltinTables.load_requirements().await.unwrap();
        let advice = BuiltinTables.load_advice().await.unwrap();
        assert!(requirements.validate().is_ok());
        assert!(advice.validate().is_ok());
    }

    #[tokio::test]
    async fn test_file_source_reads_requirement_override() {
        let table = RequirementTable::from_fn(|_, _| crate::skills::SkillRequirement {
            required: ProficiencyLevel::Developing,
            weight: 2.0,
        })
        .unwrap();
        let file = write_temp(&serde_json::to_string(&table).unwrap());

        let source = JsonFileTables {
            requirements_path: Some(file.path().to_path_buf()),
            advice_path: None,
        };
        let loaded = source.load_requirements().await.unwrap();
        assert_eq!(loaded, table);
        assert_eq!(loaded.total_weight(CareerGrade::Engineer), 20.0);
        assert_eq!(source.load_advice().await.unwrap(), AdviceTable::builtin());
    }

    #[tokio::test]
    async fn test_file_source_rejects_incomplete_advice() {
        let partial = AdviceTable::from_entries([(
            (Skill::Coding, ProficiencyLevel::NotYet),
            vec!["Pair with a senior".to_string()],
        )]);
        let file = write_temp(&serde_json::to_string(&partial).unwrap());

        let source = JsonFileTables {
            requirements_path: None,
            advice_path: Some(file.path().to_path_buf()),
        };
        let err = source.load_advice().await.unwrap_err();
        assert!(format!("{err:#}").contains("No remediation advice"), "{err:#}");
    }

    #[tokio::test]
    async fn test_file_source_reports_missing_file() {
        let source = JsonFileTables {
            requirements_path: Some(PathBuf::from("/nonexistent/requirements.json")),
            advice_path: None,
        };
        let err = source.load_requirements().await.unwrap_err();
        assert!(err.to_string().contains("Failed to read table file"));
    }

    #[tokio::test]
    async fn test_file_source_rejects_malformed_json() {
        let file = write_temp("{ \"engineer\": 3 }");
        let source = JsonFileTables {
            requirements_path: Some(file.path().to_path_buf()),
            advice_path: None,
        };
        assert!(source.load_requirements().await.is_err());
    }

    #[test]
    fn test_describe_lists_paths() {
        let source = JsonFileTables {
            requirements_path: Some(PathBuf::from("/etc/req.json")),
            advice_path: None,
        };
        assert_eq!(source.describe(), "requirements=/etc/req.json advice=builtin");
    }
}
