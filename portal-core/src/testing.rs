//! 测试用的模拟 docker / docker-compose / git 执行器

use crate::error::ExecutionError;
use crate::process::{CommandOutput, CommandRunner, CommandSpec};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::Mutex;

/// 按预设的容器状态应答命令，并记录每次调用
#[derive(Default)]
pub struct FakeRunner {
    /// 运行中的容器
    pub running: HashSet<String>,
    /// 存在（含已停止）的容器
    pub existing: HashSet<String>,
    /// ps 查询会失败的容器名（去掉 ^ 和 $ 后比较）
    pub failing_queries: HashSet<String>,
    /// start/stop/up 会失败的目标
    pub failing_actions: HashSet<String>,
    /// 工作目录 -> 分支
    pub branches: HashMap<PathBuf, String>,
    calls: Mutex<Vec<CommandSpec>>,
}

impl FakeRunner {
    pub fn with_running(running: &[&str], stopped: &[&str]) -> Self {
        let running: HashSet<String> = running.iter().map(|s| s.to_string()).collect();
        let mut existing = running.clone();
        existing.extend(stopped.iter().map(|s| s.to_string()));
        Self {
            running,
            existing,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<CommandSpec> {
        self.calls.lock().unwrap().clone()
    }

    /// 记录的调用中，以给定参数开头的命令行
    pub fn calls_matching(&self, program: &str, first_arg: &str) -> Vec<CommandSpec> {
        self.calls()
            .into_iter()
            .filter(|c| {
                c.program == program && c.args.first().map(String::as_str) == Some(first_arg)
            })
            .collect()
    }

    fn fail(spec: &CommandSpec, stderr: &str) -> ExecutionError {
        ExecutionError::failed(
            spec.to_string(),
            format!("Command failed (1): {spec}"),
            stderr,
        )
    }

    fn ok(stdout: String) -> Result<CommandOutput, ExecutionError> {
        Ok(CommandOutput {
            stdout,
            stderr: String::new(),
        })
    }
}

#[async_trait]
impl CommandRunner for FakeRunner {
    async fn run(&self, spec: &CommandSpec) -> Result<CommandOutput, ExecutionError> {
        self.calls.lock().unwrap().push(spec.clone());
        let args: Vec<&str> = spec.args.iter().map(String::as_str).collect();

        match (spec.program.as_str(), args.as_slice()) {
            ("docker", ["ps", rest @ ..]) => {
                let all = rest.contains(&"-a");
                let pattern = rest
                    .iter()
                    .find_map(|a| a.strip_prefix("name="))
                    .unwrap_or_default();
                let bare = pattern.trim_start_matches('^').trim_end_matches('$');
                if self.failing_queries.contains(bare) {
                    return Err(Self::fail(spec, "Cannot connect to the Docker daemon"));
                }
                let pool = if all { &self.existing } else { &self.running };
                let mut names: Vec<&String> = pool
                    .iter()
                    .filter(|n| docker_name_matches(pattern, n))
                    .collect();
                names.sort();
                let stdout = names
                    .into_iter()
                    .map(|n| format!("{n}\n"))
                    .collect::<String>();
                Self::ok(stdout)
            }
            ("docker", ["start" | "stop", name]) => {
                if self.failing_actions.contains(*name) {
                    return Err(Self::fail(spec, &format!("Error: No such container: {name}")));
                }
                Self::ok(format!("{name}\n"))
            }
            ("docker-compose", [.., service]) => {
                if self.failing_actions.contains(*service) {
                    return Err(Self::fail(spec, "no configuration file provided: not found"));
                }
                Ok(CommandOutput {
                    stdout: String::new(),
                    stderr: format!("Container {service}  Done\n"),
                })
            }
            ("git", _) => {
                let branch = spec
                    .cwd
                    .as_ref()
                    .and_then(|cwd| self.branches.get(cwd));
                match branch {
                    Some(branch) => Self::ok(format!("{branch}\n")),
                    None => Err(Self::fail(
                        spec,
                        "fatal: not a git repository (or any of the parent directories): .git",
                    )),
                }
            }
            _ => Err(Self::fail(spec, "unexpected command")),
        }
    }
}

/// 模拟 `docker ps --filter name=` 的匹配: 未锚定时按子串匹配
pub fn docker_name_matches(pattern: &str, name: &str) -> bool {
    if let Some(rest) = pattern.strip_prefix('^') {
        return match rest.strip_suffix('$') {
            Some(exact) => name == exact,
            None => name.starts_with(rest),
        };
    }
    match pattern.strip_suffix('$') {
        Some(suffix) => name.ends_with(suffix),
        None => name.contains(pattern),
    }
}
