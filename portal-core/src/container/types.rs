use crate::process::CommandRunner;
use crate::config::TimeoutConfig;
use serde::Serialize;
use std::sync::Arc;

/// 单个服务的运行状态，每次请求实时查询
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuntimeStatus {
    pub running: bool,
}

/// 栈成员状态
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberStatus {
    pub name: String,
    pub running: bool,
}

/// 栈的整体状态
///
/// `running` 表示至少一个成员在运行，是否全部运行由调用方比较
/// `running_count` 与 `total_count` 得出。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StackStatus {
    pub running: bool,
    pub members: Vec<MemberStatus>,
    pub running_count: usize,
    pub total_count: usize,
}

impl StackStatus {
    pub fn from_members(members: Vec<MemberStatus>) -> Self {
        let running_count = members.iter().filter(|m| m.running).count();
        let total_count = members.len();
        Self {
            running: running_count > 0,
            members,
            running_count,
            total_count,
        }
    }

    pub fn is_fully_running(&self) -> bool {
        self.total_count > 0 && self.running_count == self.total_count
    }

    pub fn is_partial(&self) -> bool {
        self.running_count > 0 && self.running_count < self.total_count
    }
}

/// 启停动作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    Start,
    Stop,
}

impl ToggleAction {
    /// 当前运行则停止，否则启动
    pub fn for_running(running: bool) -> Self {
        if running {
            ToggleAction::Stop
        } else {
            ToggleAction::Start
        }
    }

    /// 动作完成后预期的运行状态（乐观推断，不重新查询）
    pub fn resulting_running(&self) -> bool {
        matches!(self, ToggleAction::Start)
    }
}

/// 一次启停请求的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub success: bool,
    pub running: bool,
    pub message: String,
    pub per_item_results: Vec<String>,
}

impl ToggleOutcome {
    /// 逐项结果按行拼接
    pub fn output(&self) -> String {
        self.per_item_results.join("\n")
    }
}

/// Docker 容器管理器
#[derive(Clone)]
pub struct DockerManager {
    pub(crate) runner: Arc<dyn CommandRunner>,
    pub(crate) timeouts: TimeoutConfig,
}

impl std::fmt::Debug for DockerManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DockerManager")
            .field("timeouts", &self.timeouts)
            .finish_non_exhaustive()
    }
}
