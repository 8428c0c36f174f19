use crate::app::PortalApp;
use crate::project_info::get_version_string;
use portal_core::constants::{docker, git};
use tracing::{info, warn};

/// 检查 docker / docker-compose / git 是否在 PATH 中
///
/// 缺失时只给出警告，门户仍然可以启动，相关接口会返回错误。
pub fn check_prerequisites() -> bool {
    let mut all_found = true;
    for bin in [docker::DOCKER_BIN, docker::COMPOSE_BIN, git::GIT_BIN] {
        match which::which(bin) {
            Ok(path) => info!("   ✅ {}: {}", bin, path.display()),
            Err(_) => {
                warn!("   ⚠️ 未找到 {}，相关功能将不可用", bin);
                all_found = false;
            }
        }
    }
    all_found
}

/// 显示所有栈的运行状态
pub async fn run_status(app: &PortalApp) {
    info!("🧭 {} 状态", get_version_string());
    info!("==================");
    info!("🔧 依赖命令:");
    check_prerequisites();

    info!("📦 容器栈:");
    for stack in app.portal.registry().stacks() {
        let Ok(status) = app.portal.stack_status(&stack.id).await else {
            continue;
        };
        let label = if status.is_fully_running() {
            "🟢 全部运行"
        } else if status.is_partial() {
            "🟡 部分运行"
        } else {
            "⚪ 已停止"
        };
        info!(
            "   {} ({}): {} [{}/{}]",
            stack.display_name, stack.id, label, status.running_count, status.total_count
        );
        for member in &status.members {
            let mark = if member.running { "✅" } else { "❌" };
            info!("      {} {}", mark, member.name);
        }
    }
}
