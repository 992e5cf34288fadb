//! Services the host editor provides to task discovery.
//!
//! Discovery never touches the filesystem or configuration directly; it
//! goes through these traits so that an editor integration, the bundled
//! local filesystem host, and test doubles are interchangeable.

use crate::error::Result;
use crate::task::WorkspaceRoot;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Recursive file search scoped to a workspace root.
#[async_trait]
pub trait FileSearch: Send + Sync {
    /// Returns the files under `root` matching the glob `pattern`,
    /// skipping anything matched by one of the `exclude` globs.
    ///
    /// The order of the returned paths is the order in which discovery
    /// processes them.
    ///
    /// # Errors
    ///
    /// Returns `TaskError::EnumerationFailure` if the root cannot be
    /// enumerated.
    async fn search_files(
        &self,
        root: &WorkspaceRoot,
        pattern: &str,
        exclude: &[String],
    ) -> Result<Vec<PathBuf>>;
}

#[async_trait]
pub trait FileReader: Send + Sync {
    /// Reads a whole file as text.
    ///
    /// # Errors
    ///
    /// Returns `TaskError::ReadFailure` if the file is missing or unreadable.
    async fn read_file_text(&self, path: &Path) -> Result<String>;
}

/// Process-wide configuration lookup.
pub trait ConfigSource: Send + Sync {
    fn get_config_value(&self, key: &str) -> Option<String>;

    /// Exclusion globs passed to file search.
    fn exclude_globs(&self) -> Vec<String> {
        vec![]
    }
}

pub trait WorkspaceResolver: Send + Sync {
    /// All workspace roots, in the order the host lists them.
    fn workspace_roots(&self) -> Vec<WorkspaceRoot>;

    /// Maps a path to the workspace root owning it.
    fn resolve_workspace_root(&self, path: &Path) -> Option<WorkspaceRoot> {
        self.workspace_roots()
            .into_iter()
            .filter(|root| root.contains(path))
            .max_by_key(|root| root.path.components().count())
    }
}

/// Everything discovery needs from the host.
pub trait HostServices: FileSearch + FileReader + ConfigSource + WorkspaceResolver {}

impl<T> HostServices for T where T: FileSearch + FileReader + ConfigSource + WorkspaceResolver {}
