// 模块声明
mod command;
mod manager;
mod service;
mod stack;
mod types;

// 重新导出公共API
pub use command::exact_name_pattern;
pub use types::{
    DockerManager, MemberStatus, RuntimeStatus, StackStatus, ToggleAction, ToggleOutcome,
};

#[cfg(test)]
mod tests;
