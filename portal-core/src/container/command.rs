use super::types::DockerManager;
use crate::constants::docker;
use crate::error::ExecutionError;
use crate::process::{CommandOutput, CommandSpec};
use std::path::Path;

impl DockerManager {
    /// 列出名称匹配的运行中容器
    pub async fn list_running_containers(
        &self,
        pattern: &str,
    ) -> Result<Vec<String>, ExecutionError> {
        let filter = format!("name={pattern}");
        let spec = CommandSpec::new(
            docker::DOCKER_BIN,
            ["ps", "--filter", filter.as_str(), "--format", docker::NAMES_FORMAT],
            self.timeouts.docker_query(),
        );
        let output = self.runner.run(&spec).await?;
        Ok(parse_container_names(&output.stdout))
    }

    /// 列出名称匹配的所有容器（包括已停止的）
    pub async fn list_all_containers(&self, pattern: &str) -> Result<Vec<String>, ExecutionError> {
        let filter = format!("name={pattern}");
        let spec = CommandSpec::new(
            docker::DOCKER_BIN,
            ["ps", "-a", "--filter", filter.as_str(), "--format", docker::NAMES_FORMAT],
            self.timeouts.docker_query(),
        );
        let output = self.runner.run(&spec).await?;
        Ok(parse_container_names(&output.stdout))
    }

    /// docker start <容器>
    pub(crate) async fn start_container(
        &self,
        name: &str,
    ) -> Result<CommandOutput, ExecutionError> {
        let spec = CommandSpec::new(
            docker::DOCKER_BIN,
            ["start", name],
            self.timeouts.docker_action(),
        );
        self.runner.run(&spec).await
    }

    /// docker stop <容器>
    pub(crate) async fn stop_container(&self, name: &str) -> Result<CommandOutput, ExecutionError> {
        let spec = CommandSpec::new(
            docker::DOCKER_BIN,
            ["stop", name],
            self.timeouts.docker_action(),
        );
        self.runner.run(&spec).await
    }

    /// 在工作目录下以后台方式启动 compose 服务
    pub(crate) async fn compose_up(
        &self,
        working_dir: &Path,
        service: &str,
    ) -> Result<CommandOutput, ExecutionError> {
        let spec = CommandSpec::new(
            docker::COMPOSE_BIN,
            ["up", "-d", service],
            self.timeouts.docker_action(),
        )
        .in_dir(working_dir);
        self.runner.run(&spec).await
    }

    /// 在工作目录下停止 compose 服务
    pub(crate) async fn compose_stop(
        &self,
        working_dir: &Path,
        service: &str,
    ) -> Result<CommandOutput, ExecutionError> {
        let spec = CommandSpec::new(
            docker::COMPOSE_BIN,
            ["stop", service],
            self.timeouts.docker_action(),
        )
        .in_dir(working_dir);
        self.runner.run(&spec).await
    }
}

/// docker 的 name 过滤器按子串匹配，需要锚定才能精确匹配容器名
pub fn exact_name_pattern(name: &str) -> String {
    format!("^{name}$")
}

/// 解析按行输出的容器名称
pub(crate) fn parse_container_names(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
