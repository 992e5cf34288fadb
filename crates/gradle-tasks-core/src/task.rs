//! Task descriptor types handed to the host.

use serde::Serialize;
use std::path::{Path, PathBuf};

/// A workspace folder known to the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct WorkspaceRoot {
    pub name: String,
    pub path: PathBuf,
}

impl WorkspaceRoot {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Creates a root named after the last component of `path`.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { name, path }
    }

    pub fn contains(&self, path: &Path) -> bool {
        path.starts_with(&self.path)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskGroup {
    Build,
}

/// Identity of a task as the host persists it (e.g. in a tasks file).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskDefinition {
    #[serde(rename = "type")]
    pub task_type: String,
    /// Target name passed to the build tool.
    pub script: String,
    /// Directory of the build file relative to the workspace root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Shell-execution descriptor for one discovered target.
///
/// Descriptors are never mutated after synthesis; the discovery cache
/// shares them between callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDescriptor {
    pub target: String,
    pub source_path: PathBuf,
    /// Empty when the build file sits directly in the workspace root.
    pub relative_path: String,
    pub command: String,
    pub args: Vec<String>,
    pub working_directory: PathBuf,
    pub group: TaskGroup,
    /// Name of the owning workspace root.
    pub workspace: String,
    pub definition: TaskDefinition,
    /// Provider label shown by the host next to the task name.
    pub source: String,
}
