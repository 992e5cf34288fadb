//! Builds task descriptors for discovered Gradle targets.

use gradle_tasks_core::{TaskDefinition, TaskDescriptor, TaskGroup, WorkspaceRoot};
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

/// Task type recorded in every [`TaskDefinition`].
pub const TASK_TYPE: &str = "gradle";

/// Platform family, for picking the default Gradle executable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Other,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Other
        }
    }
}

pub fn default_command(platform: Platform) -> &'static str {
    match platform {
        Platform::Windows => "gradle.bat",
        Platform::Other => "gradle",
    }
}

/// Returns the executable to run: the configured override when set,
/// otherwise the platform default.
///
/// The override is not checked for existence; a bad path fails when the
/// host runs the task.
pub fn resolve_command(platform: Platform, path_override: Option<&str>) -> String {
    match path_override {
        Some(path) if !path.is_empty() => path.to_string(),
        _ => default_command(platform).to_string(),
    }
}

/// Directory containing `file`, relative to the root, with a trailing
/// separator (`app/`).
///
/// Empty when the file sits directly in the root, or outside it.
pub fn relative_dir(file: &Path, root: &WorkspaceRoot) -> String {
    let mut rel = file
        .parent()
        .and_then(|dir| dir.strip_prefix(&root.path).ok())
        .map(|rel| rel.to_string_lossy().into_owned())
        .unwrap_or_default();
    if !rel.is_empty() {
        rel.push(MAIN_SEPARATOR);
    }
    rel
}

fn working_dir(file: &Path) -> PathBuf {
    file.parent().map(Path::to_path_buf).unwrap_or_default()
}

/// Creates the descriptor running `command <target>` next to `file`.
pub fn synthesize(target: &str, file: &Path, root: &WorkspaceRoot, command: &str) -> TaskDescriptor {
    let relative_path = relative_dir(file, root);
    let definition = TaskDefinition {
        task_type: TASK_TYPE.to_string(),
        script: target.to_string(),
        path: (!relative_path.is_empty()).then(|| relative_path.clone()),
    };

    TaskDescriptor {
        target: target.to_string(),
        source_path: file.to_path_buf(),
        relative_path,
        command: command.to_string(),
        args: vec![target.to_string()],
        working_directory: working_dir(file),
        group: TaskGroup::Build,
        workspace: root.name.clone(),
        definition,
        source: TASK_TYPE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root() -> WorkspaceRoot {
        WorkspaceRoot::new("project", "/home/dev/project")
    }

    #[test]
    fn test_default_command_per_platform() {
        assert_eq!(default_command(Platform::Windows), "gradle.bat");
        assert_eq!(default_command(Platform::Other), "gradle");
    }

    #[test]
    fn test_resolve_command_without_override() {
        assert_eq!(resolve_command(Platform::Other, None), "gradle");
        assert_eq!(resolve_command(Platform::Windows, None), "gradle.bat");
        assert_eq!(resolve_command(Platform::Other, Some("")), "gradle");
    }

    #[test]
    fn test_resolve_command_override_wins() {
        let custom = "/opt/gradle-8.5/bin/gradle";
        assert_eq!(resolve_command(Platform::Other, Some(custom)), custom);
        assert_eq!(resolve_command(Platform::Windows, Some(custom)), custom);
    }

    #[test]
    fn test_current_platform() {
        let expected = if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Other
        };
        assert_eq!(Platform::current(), expected);
    }

    #[test]
    fn test_relative_dir() {
        let root = root();
        assert_eq!(
            relative_dir(Path::new("/home/dev/project/app/build.gradle"), &root),
            format!("app{MAIN_SEPARATOR}")
        );
        assert_eq!(
            relative_dir(Path::new("/home/dev/project/libs/core/build.gradle"), &root),
            format!("libs{MAIN_SEPARATOR}core{MAIN_SEPARATOR}")
        );
        assert_eq!(
            relative_dir(Path::new("/home/dev/project/build.gradle"), &root),
            ""
        );
        assert_eq!(relative_dir(Path::new("/elsewhere/build.gradle"), &root), "");
    }

    #[test]
    fn test_synthesize_nested_file() {
        let file = Path::new("/home/dev/project/app/build.gradle");
        let task = synthesize("dist", file, &root(), "gradle");

        assert_eq!(task.target, "dist");
        assert_eq!(task.args, vec!["dist"]);
        assert_eq!(task.command, "gradle");
        assert_eq!(task.source_path, file);
        assert_eq!(task.working_directory, Path::new("/home/dev/project/app"));
        assert_eq!(task.relative_path, format!("app{MAIN_SEPARATOR}"));
        assert_eq!(task.group, TaskGroup::Build);
        assert_eq!(task.workspace, "project");
        assert_eq!(task.source, "gradle");
        assert_eq!(task.definition.task_type, "gradle");
        assert_eq!(task.definition.script, "dist");
        assert_eq!(task.definition.path, Some(format!("app{MAIN_SEPARATOR}")));
    }

    #[test]
    fn test_synthesize_file_at_root() {
        let file = Path::new("/home/dev/project/build.gradle");
        let task = synthesize("clean", file, &root(), "gradle.bat");

        assert_eq!(task.relative_path, "");
        assert!(task.definition.path.is_none());
        assert_eq!(task.working_directory, Path::new("/home/dev/project"));
        assert_eq!(task.command, "gradle.bat");
    }
}
