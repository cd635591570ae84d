use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LessonError, Result};
use crate::lessons::LessonKind;

pub const DEFAULT_CONFIG_FILE: &str = "lessons.toml";
pub const CONFIG_ENV_VAR: &str = "LESSONS_CONFIG";

/// Settings for the lesson runner, read from an optional TOML file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourseConfig {
    /// Seed for random picks; entropy when absent.
    pub seed: Option<u64>,
    pub color: bool,
    pub log_filter: String,
    /// Lessons to run when none are named on the command line.
    pub lessons: Vec<String>,
}

impl Default for CourseConfig {
    fn default() -> Self {
        Self {
            seed: None,
            color: true,
            log_filter: "pattern_lessons=info".to_string(),
            lessons: Vec::new(),
        }
    }
}

impl CourseConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: CourseConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads `$LESSONS_CONFIG`, else `lessons.toml`; a missing file means defaults.
    pub fn load() -> Result<Self> {
        let path = config_path(std::env::var(CONFIG_ENV_VAR).ok());
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.log_filter.trim().is_empty() {
            return Err(LessonError::config("log_filter must not be empty"));
        }
        for name in &self.lessons {
            name.parse::<LessonKind>()?;
        }
        Ok(())
    }
}

pub fn config_path(from_env: Option<String>) -> PathBuf {
    from_env
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}
