use crate::app::PortalApp;
use tracing::info;

/// 显示每个项目当前的 git 分支
pub async fn run_branches(app: &PortalApp) {
    info!("🌿 项目分支:");
    let branches = app.portal.all_branches().await;
    for project in app.portal.registry().projects() {
        let branch = branches
            .get(&project.id)
            .map(String::as_str)
            .unwrap_or_default();
        info!("   {} ({}): {}", project.id, project.path.display(), branch);
    }
}
