//! 门户 HTTP 服务
//!
//! JSON 接口挂在 `/health` 和 `/api/...` 下，其余路径回落到 `public_dir` 静态文件。

mod error;
mod handlers;


pub use error::{ApiError, ApiResult};

use anyhow::{Context, Result};
use axum::Router;
use axum::routing::{get, post};
use portal_core::Portal;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

/// 所有请求共享的只读状态
pub struct AppState {
    pub portal: Portal,
    pub port: u16,
    pub collections_dir: PathBuf,
}

pub fn build_router(state: Arc<AppState>, public_dir: &Path) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/postman-collections", get(handlers::postman_collections))
        .route(
            "/api/postman-environments",
            get(handlers::postman_environments),
        )
        .route("/api/service/{id}/status", get(handlers::service_status))
        .route("/api/service/{id}/toggle", post(handlers::toggle_service))
        .route("/api/service/{id}/branch", get(handlers::service_branch))
        .route("/api/stack/{id}/status", get(handlers::stack_status))
        .route("/api/stack/{id}/toggle", post(handlers::toggle_stack))
        .route("/api/git/branches", get(handlers::git_branches))
        .route("/api/git/branch/{project}", get(handlers::git_branch))
        .fallback_service(ServeDir::new(public_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// 绑定端口并运行，直到收到 Ctrl+C
pub async fn run_server(
    portal: Portal,
    host: &str,
    port: u16,
    public_dir: PathBuf,
    collections_dir: PathBuf,
) -> Result<()> {
    let bind_addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .with_context(|| format!("无效的监听地址 '{host}:{port}'"))?;

    let listener = TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("无法绑定端口 {bind_addr}"))?;
    let local_addr = listener.local_addr().context("无法获取监听地址")?;

    info!("🚀 Dev Portal 已启动: http://{}", local_addr);
    info!("📁 静态文件目录: {}", public_dir.display());
    info!("📮 Postman 集合目录: {}", collections_dir.display());

    let state = Arc::new(AppState {
        portal,
        port: local_addr.port(),
        collections_dir,
    });
    let app = build_router(state, &public_dir);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("👋 收到退出信号，正在关闭服务");
        })
        .await
        .context("HTTP 服务异常退出")?;
    Ok(())
}
