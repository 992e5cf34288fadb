//! Core abstractions for gradle-tasks.
//!
//! Host service traits, task descriptor types, the error type, and the
//! discovery cache shared by build-tool specific providers.

pub mod cache;
pub mod error;
pub mod host;
pub mod provider;
pub mod task;

pub use cache::{DiscoveryCache, TaskList};
pub use error::{Result, TaskError};
pub use host::{ConfigSource, FileReader, FileSearch, HostServices, WorkspaceResolver};
pub use provider::TaskProvider;
pub use task::{TaskDefinition, TaskDescriptor, TaskGroup, WorkspaceRoot};
