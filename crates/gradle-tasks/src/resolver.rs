//! Enumerates Gradle build files across workspace roots.

use glob::{MatchOptions, Pattern};
use gradle_tasks_core::{FileSearch, Result, TaskError, WorkspaceRoot};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Glob selecting Gradle build files at any depth below a root.
pub const BUILD_FILE_GLOB: &str = "**/*.gradle";

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Compiled set of exclusion globs.
///
/// Paths are matched relative to their workspace root when they lie
/// inside it, and as given otherwise.
#[derive(Debug, Clone, Default)]
pub struct ExcludeMatcher {
    patterns: Vec<Pattern>,
}

impl ExcludeMatcher {
    pub fn new(globs: &[String]) -> Result<Self> {
        let patterns = globs
            .iter()
            .map(|glob| {
                Pattern::new(glob).map_err(|e| TaskError::InvalidPattern {
                    pattern: glob.clone(),
                    message: e.msg.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    pub fn is_excluded(&self, path: &Path, root: &Path) -> bool {
        let candidate = path.strip_prefix(root).unwrap_or(path);
        self.patterns
            .iter()
            .any(|p| p.matches_path_with(candidate, MATCH_OPTIONS))
    }
}

/// Returns whether `path` (relative to its root) matches `pattern`.
pub fn matches_glob(pattern: &Pattern, path: &Path) -> bool {
    pattern.matches_path_with(path, MATCH_OPTIONS)
}

/// A build file found during a discovery pass.
///
/// Only the absolute path is kept; the owning root is resolved again when
/// the file's tasks are synthesized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    pub path: PathBuf,
}

/// Collects build files under every root, in root order then search order.
///
/// A path reported by more than one root (overlapping roots) is kept only
/// the first time. Excluded paths are dropped even if the search service
/// returned them.
///
/// # Errors
///
/// Fails on the first root whose search fails; nothing found so far is
/// returned.
pub async fn resolve_files<S>(
    roots: &[WorkspaceRoot],
    search: &S,
    exclude: &[String],
) -> Result<Vec<CandidateFile>>
where
    S: FileSearch + ?Sized,
{
    let matcher = ExcludeMatcher::new(exclude)?;
    let mut visited: HashSet<PathBuf> = HashSet::new();
    let mut files = Vec::new();

    for root in roots {
        let paths = search.search_files(root, BUILD_FILE_GLOB, exclude).await?;

        for path in paths {
            if matcher.is_excluded(&path, &root.path) {
                tracing::trace!("excluded {:?}", path);
                continue;
            }
            if !visited.insert(path.clone()) {
                tracing::trace!("already visited {:?}", path);
                continue;
            }

            tracing::debug!("found {:?}", path);
            files.push(CandidateFile { path });
        }
    }

    Ok(files)
}
