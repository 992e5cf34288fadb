//! Gradle task discovery settings.

use gradle_tasks_core::{ConfigSource, Result, TaskError};
use serde::Deserialize;

pub const KEY_PATH_TO_GRADLE: &str = "pathToGradle";
pub const KEY_ENABLE_GRADLE: &str = "enableGradle";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GradleTaskConfig {
    /// Replaces the platform default executable when set.
    pub path_to_gradle: Option<String>,
    pub exclude: Vec<String>,
    pub enable_gradle: bool,
}

impl Default for GradleTaskConfig {
    fn default() -> Self {
        Self {
            path_to_gradle: None,
            exclude: vec![
                "**/node_modules/**".into(),
                "**/build/**".into(),
                "**/.gradle/**".into(),
            ],
            enable_gradle: true,
        }
    }
}

impl GradleTaskConfig {
    /// Loads settings from a JSON object such as editor initialization options.
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        let config: Self =
            serde_json::from_value(value).map_err(|e| TaskError::InvalidConfig(e.to_string()))?;
        tracing::debug!("loaded configuration: {:?}", config);
        Ok(config)
    }
}

impl ConfigSource for GradleTaskConfig {
    fn get_config_value(&self, key: &str) -> Option<String> {
        match key {
            KEY_PATH_TO_GRADLE => self.path_to_gradle.clone(),
            KEY_ENABLE_GRADLE => Some(self.enable_gradle.to_string()),
            _ => None,
        }
    }

    fn exclude_globs(&self) -> Vec<String> {
        self.exclude.clone()
    }
}

/// Reads a boolean setting, treating anything but `"false"` as enabled.
pub(crate) fn is_enabled<C: ConfigSource + ?Sized>(config: &C, key: &str) -> bool {
    config
        .get_config_value(key)
        .is_none_or(|value| !value.trim().eq_ignore_ascii_case("false"))
}
