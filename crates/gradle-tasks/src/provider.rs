//! Gradle task provider: ties file resolution, scanning, and synthesis
//! together behind the discovery cache.

use crate::config::{KEY_ENABLE_GRADLE, KEY_PATH_TO_GRADLE, is_enabled};
use crate::resolver::resolve_files;
use crate::scanner::extract_targets;
use crate::synthesizer::{Platform, TASK_TYPE, resolve_command, synthesize};
use async_trait::async_trait;
use gradle_tasks_core::{
    DiscoveryCache, HostServices, Result, TaskDescriptor, TaskList, TaskProvider,
};
use std::sync::Arc;

pub struct GradleTaskProvider {
    host: Arc<dyn HostServices>,
    cache: DiscoveryCache,
    platform: Platform,
}

impl GradleTaskProvider {
    pub fn new(host: Arc<dyn HostServices>) -> Self {
        Self {
            host,
            cache: DiscoveryCache::new(),
            platform: Platform::current(),
        }
    }

    /// Overrides the platform used to pick the default executable.
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Whether a discovered task list is currently cached.
    pub async fn is_cached(&self) -> bool {
        self.cache.is_populated().await
    }

    /// Runs one full discovery pass. Files are read one at a time, in
    /// resolver order.
    async fn discover(&self) -> Result<Vec<TaskDescriptor>> {
        let host = self.host.as_ref();

        if !is_enabled(host, KEY_ENABLE_GRADLE) {
            tracing::info!("gradle task discovery disabled");
            return Ok(Vec::new());
        }

        let roots = host.workspace_roots();
        if roots.is_empty() {
            tracing::debug!("no workspace roots, skipping gradle discovery");
            return Ok(Vec::new());
        }

        tracing::info!("discovering gradle tasks in {} workspace roots", roots.len());

        let command = resolve_command(
            self.platform,
            host.get_config_value(KEY_PATH_TO_GRADLE).as_deref(),
        );
        let files = resolve_files(&roots, host, &host.exclude_globs()).await?;

        let mut tasks = Vec::new();
        for file in &files {
            let Some(root) = host.resolve_workspace_root(&file.path) else {
                tracing::debug!("{:?} is outside every workspace root", file.path);
                continue;
            };

            let content = host.read_file_text(&file.path).await?;
            let targets = extract_targets(&content);
            tracing::debug!("{} targets in {:?}", targets.len(), file.path);

            tasks.extend(
                targets
                    .iter()
                    .map(|target| synthesize(target, &file.path, &root, &command)),
            );
        }

        tracing::info!("found {} gradle tasks in {} files", tasks.len(), files.len());
        Ok(tasks)
    }
}

#[async_trait]
impl TaskProvider for GradleTaskProvider {
    fn name(&self) -> &'static str {
        TASK_TYPE
    }

    async fn list_tasks(&self) -> Result<TaskList> {
        self.cache.get_or_discover(|| self.discover()).await
    }

    async fn invalidate(&self) {
        self.cache.invalidate().await;
    }
}
