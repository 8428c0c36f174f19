use super::types::{DockerManager, RuntimeStatus, ToggleAction, ToggleOutcome};
use crate::error::ExecutionError;
use crate::process::CommandOutput;
use crate::registry::ServiceDescriptor;
use tracing::{error, info};

impl DockerManager {
    /// 查询服务是否在运行: 匹配的运行中容器列表非空即为运行
    pub async fn service_status(
        &self,
        service: &ServiceDescriptor,
    ) -> Result<RuntimeStatus, ExecutionError> {
        let containers = self
            .list_running_containers(&service.container_pattern)
            .await?;
        Ok(RuntimeStatus {
            running: !containers.is_empty(),
        })
    }

    /// 切换服务的运行状态
    ///
    /// 返回的 `running` 由动作推断，执行后不再重新查询。
    /// 启停命令失败时返回错误，调用方据此报告失败。
    pub async fn toggle_service(
        &self,
        service: &ServiceDescriptor,
    ) -> Result<ToggleOutcome, ExecutionError> {
        let previous = self.service_status(service).await?;
        let action = ToggleAction::for_running(previous.running);
        let compose_service = service.compose_service();

        info!(
            "{} 服务 {} (工作目录: {})",
            match action {
                ToggleAction::Start => "▶️ 启动",
                ToggleAction::Stop => "⏹️ 停止",
            },
            service.id,
            service.working_directory.display()
        );

        let result = match action {
            ToggleAction::Start => {
                self.compose_up(&service.working_directory, compose_service)
                    .await
            }
            ToggleAction::Stop => {
                self.compose_stop(&service.working_directory, compose_service)
                    .await
            }
        };

        let output = match result {
            Ok(output) => output,
            Err(e) => {
                error!("❌ 服务 {} 切换失败: {}", service.id, e);
                return Err(e);
            }
        };

        let running = action.resulting_running();
        let message = if running {
            "Service started successfully"
        } else {
            "Service stopped successfully"
        };

        Ok(ToggleOutcome {
            success: true,
            running,
            message: message.to_string(),
            per_item_results: combined_output(&output),
        })
    }
}

/// compose 把进度写到 stderr，两路输出都保留
fn combined_output(output: &CommandOutput) -> Vec<String> {
    [output.stdout.trim(), output.stderr.trim()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
