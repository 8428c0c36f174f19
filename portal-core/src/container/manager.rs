use super::types::DockerManager;
use crate::config::TimeoutConfig;
use crate::process::CommandRunner;
use std::sync::Arc;

impl DockerManager {
    /// 创建新的 Docker 管理器
    pub fn new(runner: Arc<dyn CommandRunner>, timeouts: TimeoutConfig) -> Self {
        Self { runner, timeouts }
    }
}
