use portal_core::config::AppConfig;
use portal_core::error::Result;
use std::path::Path;
use tracing::{info, warn};

/// 生成默认配置文件和目录结构
///
/// 配置文件已存在且未指定 `force` 时不做任何修改。
pub fn run_init(config_path: &Path, force: bool) -> Result<()> {
    info!("🧭 Dev Portal 初始化");
    info!("======================");

    if !force && config_path.exists() {
        warn!("⚠️  检测到已存在的配置文件: {}", config_path.display());
        info!("如果您要重新初始化，请使用 --force 参数");
        info!("示例: dev-portal init --force");
        return Ok(());
    }

    info!("📋 步骤 1: 创建配置文件");
    let config = AppConfig::default();
    config.save_to_file(config_path)?;
    info!("   ✅ 创建配置文件: {}", config_path.display());

    info!("📋 步骤 2: 创建目录结构");
    // 目录与配置文件放在一起
    let base = config_path.parent().unwrap_or(Path::new("."));
    std::fs::create_dir_all(base.join(config.collections_dir()))?;
    std::fs::create_dir_all(base.join(config.public_dir()))?;
    info!("      - {}/  (Postman 集合目录)", config.server.collections_dir);
    info!("      - {}/  (静态页面目录)", config.server.public_dir);

    info!("🎉 初始化完成，运行 'dev-portal serve' 启动门户");
    Ok(())
}
