use crate::project_info::{metadata, version_info};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Dev Portal - 本地开发者门户
#[derive(Parser, Debug)]
#[command(name = "dev-portal")]
#[command(about = metadata::PROJECT_DESCRIPTION)]
#[command(version = version_info::CLI_VERSION)]
#[command(long_about = metadata::display::DESCRIPTION_LONG)]
#[command(author = metadata::PROJECT_AUTHORS)]
pub struct Cli {
    /// 配置文件路径（默认查找 dev-portal.toml / .dev-portal.toml）
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// 详细输出
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 不指定子命令时启动 HTTP 服务
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// 启动门户 HTTP 服务
    Serve {
        /// 监听端口，优先于配置文件和 PORT 环境变量
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// 生成带注释的默认配置文件
    Init {
        /// 如果配置文件已存在，强制覆盖
        #[arg(long)]
        force: bool,
    },
    /// 显示所有栈的容器运行状态
    Status,
    /// 显示所有项目的 git 分支
    Branches,
}

impl Cli {
    /// 实际要执行的命令
    pub fn selected_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Serve { port: None })
    }
}
