use crate::error::{PortalError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

/// 单个服务: 容器名匹配模式 + docker-compose 工作目录 + git 项目路径
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    pub id: String,
    pub container_pattern: String,
    pub working_directory: PathBuf,
    /// docker-compose 中的服务名，未配置时与 id 相同
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compose_service: Option<String>,
    pub project_path: PathBuf,
}

impl ServiceDescriptor {
    pub fn compose_service(&self) -> &str {
        self.compose_service.as_deref().unwrap_or(&self.id)
    }
}

/// 栈: 按声明顺序排列的一组容器名匹配模式
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackDescriptor {
    pub id: String,
    pub display_name: String,
    pub members: Vec<String>,
}

/// git 项目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDescriptor {
    pub id: String,
    pub path: PathBuf,
}

/// 启动时加载一次的只读注册表，按 id 精确查找
#[derive(Debug, Clone, Default)]
pub struct Registry {
    services: Vec<ServiceDescriptor>,
    stacks: Vec<StackDescriptor>,
    projects: Vec<ProjectDescriptor>,
    service_index: HashMap<String, usize>,
    stack_index: HashMap<String, usize>,
    project_index: HashMap<String, usize>,
}

impl Registry {
    /// 校验并建立索引
    pub fn new(
        services: Vec<ServiceDescriptor>,
        stacks: Vec<StackDescriptor>,
        projects: Vec<ProjectDescriptor>,
    ) -> Result<Self> {
        let service_index = build_index("service", services.iter().map(|s| s.id.as_str()))?;
        let stack_index = build_index("stack", stacks.iter().map(|s| s.id.as_str()))?;
        let project_index = build_index("project", projects.iter().map(|p| p.id.as_str()))?;

        for service in &services {
            if service.container_pattern.trim().is_empty() {
                return Err(PortalError::invalid_config(format!(
                    "服务 {} 的 container_pattern 为空",
                    service.id
                )));
            }
        }

        for stack in &stacks {
            if stack.members.is_empty() {
                return Err(PortalError::invalid_config(format!(
                    "栈 {} 没有任何成员容器",
                    stack.id
                )));
            }
            if let Some(member) = stack.members.iter().find(|m| m.trim().is_empty()) {
                return Err(PortalError::invalid_config(format!(
                    "栈 {} 包含空的成员名称: {:?}",
                    stack.id, member
                )));
            }
        }

        Ok(Self {
            services,
            stacks,
            projects,
            service_index,
            stack_index,
            project_index,
        })
    }

    pub fn service(&self, id: &str) -> Result<&ServiceDescriptor> {
        self.service_index
            .get(id)
            .map(|&i| &self.services[i])
            .ok_or_else(|| PortalError::ServiceNotFound(id.to_string()))
    }

    pub fn stack(&self, id: &str) -> Result<&StackDescriptor> {
        self.stack_index
            .get(id)
            .map(|&i| &self.stacks[i])
            .ok_or_else(|| PortalError::StackNotFound(id.to_string()))
    }

    pub fn project(&self, id: &str) -> Result<&ProjectDescriptor> {
        self.project_index
            .get(id)
            .map(|&i| &self.projects[i])
            .ok_or_else(|| PortalError::ProjectNotFound(id.to_string()))
    }

    pub fn services(&self) -> &[ServiceDescriptor] {
        &self.services
    }

    pub fn stacks(&self) -> &[StackDescriptor] {
        &self.stacks
    }

    pub fn projects(&self) -> &[ProjectDescriptor] {
        &self.projects
    }
}

fn build_index<'a>(
    kind: &str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<HashMap<String, usize>> {
    let mut seen = HashSet::new();
    let mut index = HashMap::new();
    for (i, id) in ids.enumerate() {
        if id.trim().is_empty() {
            return Err(PortalError::invalid_config(format!("{kind} id 不能为空")));
        }
        if !seen.insert(id) {
            return Err(PortalError::invalid_config(format!(
                "重复的 {kind} id: {id}"
            )));
        }
        index.insert(id.to_string(), i);
    }
    Ok(index)
}
