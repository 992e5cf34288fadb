//! Gradle task discovery.
//!
//! Finds `*.gradle` files in the workspace roots, picks up one-line
//! `task <name>(...)` declarations, and turns each into a shell task
//! running `gradle <name>` next to the build file.
//!
//! Discovery results are cached until [`GradleTaskProvider`] is
//! invalidated, typically on a build file change.

pub mod config;
pub mod host;
pub mod provider;
pub mod resolver;
pub mod scanner;
pub mod synthesizer;

pub use config::GradleTaskConfig;
pub use host::LocalHost;
pub use provider::GradleTaskProvider;
pub use resolver::{BUILD_FILE_GLOB, CandidateFile, ExcludeMatcher, resolve_files};
pub use scanner::{ScanReport, SkipReason, SkippedLine, extract_targets, scan_targets};
pub use synthesizer::{Platform, default_command, resolve_command, synthesize};

pub use gradle_tasks_core::{
    Result, TaskDefinition, TaskDescriptor, TaskError, TaskGroup, TaskList, TaskProvider,
    WorkspaceRoot,
};
