use crate::constants::{self, config, server, timeout};
use crate::container::exact_name_pattern;
use crate::error::{PortalError, Result};
use crate::registry::{ProjectDescriptor, Registry, ServiceDescriptor, StackDescriptor};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// 应用配置结构
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub timeouts: TimeoutConfig,
    #[serde(default)]
    pub services: Vec<ServiceDescriptor>,
    #[serde(default)]
    pub stacks: Vec<StackDescriptor>,
    #[serde(default)]
    pub projects: Vec<ProjectDescriptor>,
}

/// HTTP 服务配置
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub public_dir: String,
    pub collections_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: server::DEFAULT_HOST.to_string(),
            port: server::DEFAULT_PORT,
            public_dir: server::DEFAULT_PUBLIC_DIR.to_string(),
            collections_dir: server::DEFAULT_COLLECTIONS_DIR.to_string(),
        }
    }
}

/// 外部命令超时配置（秒）
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct TimeoutConfig {
    pub docker_query_secs: u64,
    pub docker_action_secs: u64,
    pub git_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            docker_query_secs: timeout::DOCKER_QUERY_TIMEOUT,
            docker_action_secs: timeout::DOCKER_ACTION_TIMEOUT,
            git_secs: timeout::GIT_TIMEOUT,
        }
    }
}

impl TimeoutConfig {
    pub fn docker_query(&self) -> Duration {
        Duration::from_secs(self.docker_query_secs.max(1))
    }

    pub fn docker_action(&self) -> Duration {
        Duration::from_secs(self.docker_action_secs.max(1))
    }

    pub fn git(&self) -> Duration {
        Duration::from_secs(self.git_secs.max(1))
    }
}

/// 只用于生成配置文件的注册表部分
#[derive(Serialize)]
struct RegistrySection<'a> {
    services: &'a [ServiceDescriptor],
    stacks: &'a [StackDescriptor],
    projects: &'a [ProjectDescriptor],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::with_projects_root(config::DEFAULT_PROJECTS_ROOT)
    }
}

impl AppConfig {
    /// 内置注册表: 每个栈对应项目根目录下的一个子目录，
    /// 栈内每个容器对应一个同名服务（名称精确匹配，避免 vote-ui 匹配到 vote-ui-vue）
    pub fn with_projects_root<P: AsRef<Path>>(projects_root: P) -> Self {
        let root = projects_root.as_ref();
        let mut services = Vec::new();
        let mut stacks = Vec::new();
        let mut projects = Vec::new();

        for (stack_id, display_name, members) in constants::DEFAULT_STACKS {
            let stack_dir = root.join(stack_id);
            for member in members.iter() {
                services.push(ServiceDescriptor {
                    id: member.to_string(),
                    container_pattern: exact_name_pattern(member),
                    working_directory: stack_dir.clone(),
                    compose_service: None,
                    project_path: stack_dir.clone(),
                });
            }
            stacks.push(StackDescriptor {
                id: stack_id.to_string(),
                display_name: display_name.to_string(),
                members: members.iter().map(|m| m.to_string()).collect(),
            });
            projects.push(ProjectDescriptor {
                id: stack_id.to_string(),
                path: stack_dir,
            });
        }

        Self {
            server: ServerConfig::default(),
            timeouts: TimeoutConfig::default(),
            services,
            stacks,
            projects,
        }
    }

    /// 智能查找并加载配置文件
    /// 按优先级查找：dev-portal.toml -> .dev-portal.toml，都不存在时使用内置配置
    pub fn find_and_load_config() -> Result<Self> {
        for config_file in config::CONFIG_FILE_NAMES {
            if Path::new(config_file).exists() {
                tracing::info!("找到配置文件: {}", config_file);
                return Self::load_from_file(config_file);
            }
        }

        tracing::warn!("未找到配置文件，使用内置默认配置");
        Ok(Self::default())
    }

    /// 从指定文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)?;
        let config: AppConfig = toml::from_str(&content)?;

        Ok(config)
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = self.to_toml_with_comments()?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// 生成带注释的TOML配置
    fn to_toml_with_comments(&self) -> Result<String> {
        const TEMPLATE: &str = include_str!("../templates/dev-portal.toml.template");

        let registry = toml::to_string(&RegistrySection {
            services: &self.services,
            stacks: &self.stacks,
            projects: &self.projects,
        })
        .map_err(|e| PortalError::invalid_config(format!("注册表序列化失败: {e}")))?;

        Ok(TEMPLATE
            .replace("{host}", &self.server.host)
            .replace("{port}", &self.server.port.to_string())
            .replace("{public_dir}", &self.server.public_dir)
            .replace("{collections_dir}", &self.server.collections_dir)
            .replace(
                "{docker_query_secs}",
                &self.timeouts.docker_query_secs.to_string(),
            )
            .replace(
                "{docker_action_secs}",
                &self.timeouts.docker_action_secs.to_string(),
            )
            .replace("{git_secs}", &self.timeouts.git_secs.to_string())
            .replace("{registry}", &registry))
    }

    /// PORT 环境变量覆盖配置文件中的端口，无效值被忽略
    pub fn apply_port_override(&mut self, value: Option<String>) {
        let Some(value) = value else {
            return;
        };
        match value.trim().parse::<u16>() {
            Ok(port) => self.server.port = port,
            Err(_) => tracing::warn!("⚠️ 忽略无效的 {} 值: {}", server::PORT_ENV, value),
        }
    }

    /// 校验注册表并建立索引
    pub fn build_registry(&self) -> Result<Registry> {
        Registry::new(
            self.services.clone(),
            self.stacks.clone(),
            self.projects.clone(),
        )
    }

    pub fn public_dir(&self) -> PathBuf {
        PathBuf::from(&self.server.public_dir)
    }

    pub fn collections_dir(&self) -> PathBuf {
        PathBuf::from(&self.server.collections_dir)
    }
}
