//! Interface a build-tool specific task provider exposes to the host.

use crate::cache::TaskList;
use crate::error::Result;
use crate::task::TaskDescriptor;
use async_trait::async_trait;

/// Source of tasks for one build tool.
///
/// Implementations cache their discovered tasks; `list_tasks` is cheap
/// after the first successful call until `invalidate` is called.
#[async_trait]
pub trait TaskProvider: Send + Sync {
    /// Provider label, e.g. `"gradle"`.
    fn name(&self) -> &'static str;

    /// Returns all discovered tasks, scanning the workspace on a cache miss.
    ///
    /// # Errors
    ///
    /// Returns the first enumeration or read error of the scan. The cache
    /// is not updated in that case.
    async fn list_tasks(&self) -> Result<TaskList>;

    /// Drops cached tasks so the next `list_tasks` rescans.
    async fn invalidate(&self);

    /// Fills in a task the host restored from its own storage.
    ///
    /// Returns `None` when the provider has nothing to add.
    fn resolve_task(&self, _task: &TaskDescriptor) -> Option<TaskDescriptor> {
        None
    }
}
