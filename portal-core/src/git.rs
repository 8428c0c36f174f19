use crate::constants::git;
use crate::error::ExecutionError;
use crate::process::{CommandRunner, CommandSpec};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// 查询 git 工作目录的当前分支
#[derive(Clone)]
pub struct BranchReporter {
    runner: Arc<dyn CommandRunner>,
    timeout: Duration,
}

impl BranchReporter {
    pub fn new(runner: Arc<dyn CommandRunner>, timeout: Duration) -> Self {
        Self { runner, timeout }
    }

    /// 当前分支名；输出为空（detached HEAD）时返回 "unknown"
    pub async fn branch_of(&self, path: &Path) -> Result<String, ExecutionError> {
        let spec =
            CommandSpec::new(git::GIT_BIN, ["branch", "--show-current"], self.timeout).in_dir(path);
        let output = self.runner.run(&spec).await?;
        let branch = output.stdout.trim();
        if branch.is_empty() {
            return Ok(git::UNKNOWN_BRANCH.to_string());
        }
        Ok(branch.to_string())
    }

    /// 失败时返回调用方指定的占位值，不向上传播错误
    pub async fn branch_or(&self, path: &Path, sentinel: &str) -> String {
        match self.branch_of(path).await {
            Ok(branch) => branch,
            Err(e) => {
                debug!("读取 {} 的分支失败: {}", path.display(), e);
                sentinel.to_string()
            }
        }
    }
}
