//! Host services backed by the local filesystem.
//!
//! Lets the discovery pipeline run outside an editor: roots are plain
//! directories, search walks them with `walkdir`, and configuration comes
//! from a [`GradleTaskConfig`].

use crate::config::GradleTaskConfig;
use crate::resolver::{ExcludeMatcher, matches_glob};
use async_trait::async_trait;
use glob::Pattern;
use gradle_tasks_core::{
    ConfigSource, FileReader, FileSearch, Result, TaskError, WorkspaceResolver, WorkspaceRoot,
};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Maximum build file size in bytes (50MB).
const MAX_FILE_SIZE: u64 = 50_000_000;

/// Size above which a warning is logged.
const LARGE_FILE_SIZE: u64 = 10_000_000;

#[derive(Debug, Clone, Default)]
pub struct LocalHost {
    roots: Vec<WorkspaceRoot>,
    config: GradleTaskConfig,
}

impl LocalHost {
    pub fn new(roots: Vec<WorkspaceRoot>) -> Self {
        Self {
            roots,
            config: GradleTaskConfig::default(),
        }
    }

    pub fn with_config(mut self, config: GradleTaskConfig) -> Self {
        self.config = config;
        self
    }
}

fn walk(root: &Path, pattern: &Pattern, matcher: &ExcludeMatcher) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                let message = e.to_string();
                let source = e
                    .into_io_error()
                    .unwrap_or_else(|| std::io::Error::other(message));
                return Err(TaskError::enumeration(root, source));
            }
            Err(e) => {
                tracing::warn!("skipping unreadable entry under {:?}: {}", root, e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let Ok(relative) = path.strip_prefix(root) else {
            continue;
        };
        if matches_glob(pattern, relative) && !matcher.is_excluded(path, root) {
            found.push(path.to_path_buf());
        }
    }

    Ok(found)
}

#[async_trait]
impl FileSearch for LocalHost {
    async fn search_files(
        &self,
        root: &WorkspaceRoot,
        pattern: &str,
        exclude: &[String],
    ) -> Result<Vec<PathBuf>> {
        let pattern = Pattern::new(pattern).map_err(|e| TaskError::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.msg.to_string(),
        })?;
        let matcher = ExcludeMatcher::new(exclude)?;
        let root_path = root.path.clone();

        tracing::debug!("searching {:?} for {}", root_path, pattern.as_str());

        tokio::task::spawn_blocking(move || walk(&root_path, &pattern, &matcher))
            .await
            .map_err(|e| TaskError::enumeration(&root.path, std::io::Error::other(e)))?
    }
}

#[async_trait]
impl FileReader for LocalHost {
    async fn read_file_text(&self, path: &Path) -> Result<String> {
        let metadata = tokio::fs::metadata(path)
            .await
            .map_err(|e| TaskError::read(path, e))?;

        let size = metadata.len();
        if size > MAX_FILE_SIZE {
            tracing::error!(
                "Build file exceeds maximum size: {} bytes (limit: {} bytes)",
                size,
                MAX_FILE_SIZE
            );
            return Err(TaskError::read(
                path,
                std::io::Error::other(format!(
                    "file too large: {} bytes (max: {} bytes)",
                    size, MAX_FILE_SIZE
                )),
            ));
        }
        if size > LARGE_FILE_SIZE {
            tracing::warn!("Build file is very large: {:?} ({} bytes)", path, size);
        }

        tokio::fs::read_to_string(path)
            .await
            .map_err(|e| TaskError::read(path, e))
    }
}

impl ConfigSource for LocalHost {
    fn get_config_value(&self, key: &str) -> Option<String> {
        self.config.get_config_value(key)
    }

    fn exclude_globs(&self) -> Vec<String> {
        self.config.exclude_globs()
    }
}

impl WorkspaceResolver for LocalHost {
    fn workspace_roots(&self) -> Vec<WorkspaceRoot> {
        self.roots.clone()
    }
}
