use crate::cli::Commands;
use crate::commands;
use crate::server;
use portal_core::config::AppConfig;
use portal_core::constants::server::PORT_ENV;
use portal_core::error::Result;
use portal_core::process::SystemRunner;
use portal_core::Portal;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct PortalApp {
    pub config: AppConfig,
    pub portal: Portal,
}

impl PortalApp {
    /// 加载配置并初始化门户
    ///
    /// 指定了配置文件时直接读取，否则按默认文件名查找，找不到时使用内置注册表。
    pub fn new(config_path: Option<PathBuf>) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => {
                info!("📄 使用配置文件: {}", path.display());
                AppConfig::load_from_file(&path)?
            }
            None => AppConfig::find_and_load_config()?,
        };
        config.apply_port_override(std::env::var(PORT_ENV).ok());

        let portal = Portal::new(&config, Arc::new(SystemRunner))?;
        info!(
            "📋 已加载 {} 个服务, {} 个栈, {} 个项目",
            portal.registry().services().len(),
            portal.registry().stacks().len(),
            portal.registry().projects().len()
        );

        Ok(Self { config, portal })
    }

    /// 运行应用命令
    pub async fn run_command(&self, command: Commands) -> anyhow::Result<()> {
        match command {
            Commands::Serve { port } => {
                commands::check_prerequisites();
                let port = port.unwrap_or(self.config.server.port);
                server::run_server(
                    self.portal.clone(),
                    &self.config.server.host,
                    port,
                    self.config.public_dir(),
                    self.config.collections_dir(),
                )
                .await
            }
            Commands::Status => {
                commands::run_status(self).await;
                Ok(())
            }
            Commands::Branches => {
                commands::run_branches(self).await;
                Ok(())
            }
            Commands::Init { .. } => unreachable!(), // 已经在 main.rs 中处理
        }
    }
}
