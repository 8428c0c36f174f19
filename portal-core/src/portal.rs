use crate::config::AppConfig;
use crate::constants::git;
use crate::container::{DockerManager, RuntimeStatus, StackStatus, ToggleOutcome};
use crate::error::Result;
use crate::git::BranchReporter;
use crate::process::CommandRunner;
use crate::registry::Registry;
use std::collections::BTreeMap;
use std::sync::Arc;

/// 按 id 对外提供状态查询、启停和分支查询
///
/// 注册表只读，运行状态每次实时查询，不做缓存。
#[derive(Clone)]
pub struct Portal {
    registry: Arc<Registry>,
    docker: DockerManager,
    git: BranchReporter,
}

impl Portal {
    pub fn new(config: &AppConfig, runner: Arc<dyn CommandRunner>) -> Result<Self> {
        let registry = config.build_registry()?;
        Ok(Self {
            registry: Arc::new(registry),
            docker: DockerManager::new(runner.clone(), config.timeouts.clone()),
            git: BranchReporter::new(runner, config.timeouts.git()),
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub async fn service_status(&self, id: &str) -> Result<RuntimeStatus> {
        let service = self.registry.service(id)?;
        Ok(self.docker.service_status(service).await?)
    }

    pub async fn toggle_service(&self, id: &str) -> Result<ToggleOutcome> {
        let service = self.registry.service(id)?;
        Ok(self.docker.toggle_service(service).await?)
    }

    pub async fn stack_status(&self, id: &str) -> Result<StackStatus> {
        let stack = self.registry.stack(id)?;
        Ok(self.docker.stack_status(stack).await)
    }

    pub async fn toggle_stack(&self, id: &str) -> Result<ToggleOutcome> {
        let stack = self.registry.stack(id)?;
        Ok(self.docker.toggle_stack(stack).await)
    }

    /// 项目分支，失败时为 "error"
    pub async fn project_branch(&self, id: &str) -> Result<String> {
        let project = self.registry.project(id)?;
        Ok(self
            .git
            .branch_or(&project.path, git::PROJECT_BRANCH_ERROR)
            .await)
    }

    /// 服务所属项目的分支，失败时为 "not a repo"
    pub async fn service_branch(&self, id: &str) -> Result<String> {
        let service = self.registry.service(id)?;
        Ok(self
            .git
            .branch_or(&service.project_path, git::SERVICE_BRANCH_ERROR)
            .await)
    }

    /// 所有项目的分支，单个项目失败不影响其他项目
    pub async fn all_branches(&self) -> BTreeMap<String, String> {
        let mut branches = BTreeMap::new();
        for project in self.registry.projects() {
            let branch = self
                .git
                .branch_or(&project.path, git::PROJECT_BRANCH_ERROR)
                .await;
            branches.insert(project.id.clone(), branch);
        }
        branches
    }
}
