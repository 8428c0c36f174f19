// 私有模块声明
mod app;
mod cli;
mod commands;
mod init;
pub mod project_info; // 公开项目信息模块
pub mod server;
mod utils;

// 通过 pub use 精确控制对外暴露的接口
pub use app::PortalApp;
pub use cli::{Cli, Commands};
pub use commands::{check_prerequisites, run_branches, run_status};
pub use init::run_init;
pub use server::{AppState, build_router, run_server};
pub use utils::{LOG_FILE_ENV, setup_logging};
