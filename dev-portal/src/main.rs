use clap::Parser;
use dev_portal::{Cli, Commands, PortalApp, run_init, setup_logging};
use portal_core::PortalError;
use portal_core::constants::config::DEFAULT_CONFIG_FILE;
use std::path::PathBuf;
use tracing::error;

#[tokio::main]
async fn main() {
    // 解析命令行参数
    let cli = Cli::parse();

    // 设置日志记录
    setup_logging(cli.verbose);

    let command = cli.selected_command();

    // `init` 命令是特例，它不需要预先加载配置
    if let Commands::Init { force } = command {
        let path = cli
            .config
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        if let Err(e) = run_init(&path, force) {
            error!("❌ 初始化失败: {}", e);
            std::process::exit(1);
        }
        return;
    }

    let app = match PortalApp::new(cli.config.clone()) {
        Ok(app) => app,
        Err(e) => {
            error!("❌ 应用初始化失败: {}", e);
            if matches!(e, PortalError::Io(_)) {
                error!("👉 请检查配置文件路径，或运行 'dev-portal init' 生成默认配置");
            }
            std::process::exit(1);
        }
    };

    if let Err(e) = app.run_command(command).await {
        error!("❌ 操作失败: {:#}", e);
        std::process::exit(1);
    }
}
