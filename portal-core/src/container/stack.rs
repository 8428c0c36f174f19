use super::command::exact_name_pattern;
use super::types::{DockerManager, MemberStatus, StackStatus, ToggleAction, ToggleOutcome};
use crate::registry::StackDescriptor;
use tracing::{info, warn};

impl DockerManager {
    /// 逐个查询栈成员状态
    ///
    /// 单个成员查询失败按"未运行"处理，不影响其余成员。
    pub async fn stack_status(&self, stack: &StackDescriptor) -> StackStatus {
        let mut members = Vec::with_capacity(stack.members.len());

        for member in &stack.members {
            let pattern = exact_name_pattern(member);
            let running = match self.list_running_containers(&pattern).await {
                Ok(containers) => !containers.is_empty(),
                Err(e) => {
                    warn!("⚠️ 查询容器 {} 状态失败: {}", member, e);
                    false
                }
            };
            members.push(MemberStatus {
                name: member.clone(),
                running,
            });
        }

        let status = StackStatus::from_members(members);
        info!(
            "栈 {}: {}/{} 个容器运行中",
            stack.id, status.running_count, status.total_count
        );
        status
    }

    /// 切换整个栈
    ///
    /// 只要有一个成员在运行就停止全部成员，否则启动全部成员。
    /// 单个成员的失败只记录在逐项结果中，整体始终返回成功。
    pub async fn toggle_stack(&self, stack: &StackDescriptor) -> ToggleOutcome {
        let status = self.stack_status(stack).await;
        let action = ToggleAction::for_running(status.running);

        let per_item_results = match action {
            ToggleAction::Stop => {
                info!("⏹️ 停止栈 {} 的全部 {} 个容器", stack.id, stack.members.len());
                self.stop_members(&stack.members).await
            }
            ToggleAction::Start => {
                info!("▶️ 启动栈 {} 的全部 {} 个容器", stack.id, stack.members.len());
                self.start_members(&stack.members).await
            }
        };

        let running = action.resulting_running();
        let message = if running {
            "Stack started successfully"
        } else {
            "Stack stopped successfully"
        };

        ToggleOutcome {
            success: true,
            running,
            message: message.to_string(),
            per_item_results,
        }
    }

    async fn stop_members(&self, members: &[String]) -> Vec<String> {
        let mut results = Vec::with_capacity(members.len());
        for member in members {
            match self.stop_container(member).await {
                Ok(_) => results.push(format!("Stopped {member}")),
                Err(e) => {
                    warn!("⚠️ 停止容器 {} 失败: {}", member, e);
                    results.push(format!("{member}: {}", e.detail()));
                }
            }
        }
        results
    }

    async fn start_members(&self, members: &[String]) -> Vec<String> {
        let mut results = Vec::with_capacity(members.len());
        for member in members {
            // 不存在的容器无法 docker start，直接记录
            match self.list_all_containers(&exact_name_pattern(member)).await {
                Ok(existing) if existing.is_empty() => {
                    warn!("⚠️ 容器 {} 不存在，跳过启动", member);
                    results.push(format!("{member}: Container does not exist"));
                    continue;
                }
                Ok(_) => {}
                Err(e) => {
                    warn!("⚠️ 检查容器 {} 是否存在失败: {}", member, e);
                    results.push(format!("{member}: {}", e.detail()));
                    continue;
                }
            }

            match self.start_container(member).await {
                Ok(_) => results.push(format!("Started {member}")),
                Err(e) => {
                    warn!("⚠️ 启动容器 {} 失败: {}", member, e);
                    results.push(format!("{member}: {}", e.detail()));
                }
            }
        }
        results
    }
}
