use thiserror::Error;

pub type Result<T> = std::result::Result<T, PortalError>;

/// 外部命令执行错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    #[error("命令执行超时 ({timeout_ms}ms): {command}")]
    Timeout { command: String, timeout_ms: u64 },

    #[error("{message}")]
    Failed {
        command: String,
        message: String,
        stderr: String,
    },
}

impl ExecutionError {
    pub fn failed(
        command: impl Into<String>,
        message: impl Into<String>,
        stderr: impl Into<String>,
    ) -> Self {
        Self::Failed {
            command: command.into(),
            message: message.into(),
            stderr: stderr.into(),
        }
    }

    /// 错误信息附带 stderr，用于逐项结果
    pub fn detail(&self) -> String {
        match self.stderr() {
            Some(stderr) => format!("{self}: {}", stderr.trim()),
            None => self.to_string(),
        }
    }

    /// 命令的标准错误输出（超时没有 stderr）
    pub fn stderr(&self) -> Option<&str> {
        match self {
            ExecutionError::Failed { stderr, .. } if !stderr.trim().is_empty() => Some(stderr),
            _ => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum PortalError {
    #[error("Service not found: {0}")]
    ServiceNotFound(String),

    #[error("Stack not found: {0}")]
    StackNotFound(String),

    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    #[error(transparent)]
    Execution(#[from] ExecutionError),

    #[error("集合文件错误: {0}")]
    Collection(String),

    #[error("配置错误: {0}")]
    Config(#[from] toml::de::Error),

    #[error("配置无效: {0}")]
    InvalidConfig(String),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("序列化错误: {0}")]
    Serde(#[from] serde_json::Error),
}

impl PortalError {
    pub fn collection(msg: impl Into<String>) -> Self {
        Self::Collection(msg.into())
    }

    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// 未知的服务、栈或项目 ID
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            PortalError::ServiceNotFound(_)
                | PortalError::StackNotFound(_)
                | PortalError::ProjectNotFound(_)
        )
    }
}
