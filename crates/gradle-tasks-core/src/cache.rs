//! Memoized result of the last successful discovery pass.
//!
//! The cache holds either nothing or one complete task list. It has no
//! expiry: only [`DiscoveryCache::invalidate`] empties it, typically when
//! the host reports a build file change.

use crate::error::Result;
use crate::task::TaskDescriptor;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::RwLock;

pub type TaskList = Arc<[TaskDescriptor]>;

#[derive(Default)]
pub struct DiscoveryCache {
    tasks: RwLock<Option<TaskList>>,
}

impl DiscoveryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self) -> Option<TaskList> {
        self.tasks.read().await.clone()
    }

    pub async fn is_populated(&self) -> bool {
        self.tasks.read().await.is_some()
    }

    /// Returns the cached list, or runs `discover` and caches its result.
    ///
    /// The lock is not held while `discover` runs. Two callers racing on an
    /// empty cache both scan; the later result wins. A failed `discover`
    /// leaves the cache untouched.
    pub async fn get_or_discover<F, Fut>(&self, discover: F) -> Result<TaskList>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<TaskDescriptor>>>,
    {
        if let Some(tasks) = self.get().await {
            tracing::debug!("task cache hit: {} tasks", tasks.len());
            return Ok(tasks);
        }

        let tasks: TaskList = discover().await?.into();
        *self.tasks.write().await = Some(Arc::clone(&tasks));
        Ok(tasks)
    }

    pub async fn invalidate(&self) {
        if self.tasks.write().await.take().is_some() {
            tracing::debug!("task cache invalidated");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TaskError;
    use crate::task::{TaskDefinition, TaskGroup};
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn task(name: &str) -> TaskDescriptor {
        TaskDescriptor {
            target: name.into(),
            source_path: PathBuf::from("/w/build.gradle"),
            relative_path: String::new(),
            command: "gradle".into(),
            args: vec![name.into()],
            working_directory: PathBuf::from("/w"),
            group: TaskGroup::Build,
            workspace: "w".into(),
            definition: TaskDefinition {
                task_type: "gradle".into(),
                script: name.into(),
                path: None,
            },
            source: "gradle".into(),
        }
    }

    #[tokio::test]
    async fn test_starts_empty() {
        let cache = DiscoveryCache::new();
        assert!(!cache.is_populated().await);
        assert!(cache.get().await.is_none());
    }

    #[tokio::test]
    async fn test_discovers_once() {
        let cache = DiscoveryCache::new();
        let counter = AtomicUsize::new(0);
        let calls = &counter;

        let first = cache
            .get_or_discover(|| async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(vec![task("build")])
            })
            .await
            .unwrap();
        let second = cache
            .get_or_discover(|| async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(vec![task("other")])
            })
            .await
            .unwrap();

        assert_eq!(counter.load(Ordering::SeqCst), 1);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second[0].target, "build");
    }

    #[tokio::test]
    async fn test_failure_keeps_previous_state() {
        let cache = DiscoveryCache::new();
        let result = cache
            .get_or_discover(|| async { Err(TaskError::InvalidConfig("boom".into())) })
            .await;
        assert!(result.is_err());
        assert!(!cache.is_populated().await);
    }

    #[tokio::test]
    async fn test_invalidate() {
        let cache = DiscoveryCache::new();
        cache
            .get_or_discover(|| async { Ok(vec![task("build")]) })
            .await
            .unwrap();
        assert!(cache.is_populated().await);

        cache.invalidate().await;
        assert!(!cache.is_populated().await);

        // Safe on an empty cache.
        cache.invalidate().await;
        assert!(!cache.is_populated().await);
    }
}
