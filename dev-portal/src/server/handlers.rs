use super::AppState;
use super::error::ApiResult;
use axum::Json;
use axum::extract::{Path, State};
use portal_core::collections;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::info;

pub(super) async fn health(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({ "status": "ok", "port": state.port }))
}

pub(super) async fn postman_collections(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Value>> {
    let collections = collections::list_collections(&state.collections_dir).await?;
    Ok(Json(json!(collections)))
}

pub(super) async fn postman_environments(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Value>> {
    let variables = collections::merge_environments(&state.collections_dir).await?;
    Ok(Json(json!(variables)))
}

pub(super) async fn service_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    let status = state.portal.service_status(&id).await?;
    Ok(Json(json!({ "running": status.running, "service": id })))
}

pub(super) async fn toggle_service(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    let outcome = state.portal.toggle_service(&id).await?;
    info!("🔀 服务 {}: {}", id, outcome.message);
    Ok(Json(json!({
        "success": outcome.success,
        "running": outcome.running,
        "message": outcome.message,
        "service": id,
        "output": outcome.output(),
    })))
}

pub(super) async fn stack_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    let status = state.portal.stack_status(&id).await?;
    Ok(Json(json!({
        "running": status.running,
        "services": status.members,
        "runningCount": status.running_count,
        "totalCount": status.total_count,
    })))
}

pub(super) async fn toggle_stack(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    let outcome = state.portal.toggle_stack(&id).await?;
    info!("🔀 栈 {}: {}", id, outcome.message);
    Ok(Json(json!({
        "success": outcome.success,
        "running": outcome.running,
        "message": outcome.message,
        "stack": id,
        "output": outcome.output(),
    })))
}

pub(super) async fn git_branches(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!(state.portal.all_branches().await))
}

pub(super) async fn git_branch(
    State(state): State<Arc<AppState>>,
    Path(project): Path<String>,
) -> ApiResult<Json<Value>> {
    let branch = state.portal.project_branch(&project).await?;
    Ok(Json(json!({ "project": project, "branch": branch })))
}

pub(super) async fn service_branch(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    let branch = state.portal.service_branch(&id).await?;
    Ok(Json(json!({ "service": id, "branch": branch })))
}
