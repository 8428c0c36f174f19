use crate::constants::server::ENVIRONMENT_FILE_SUFFIX;
use crate::error::{PortalError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, warn};

/// 一个 Postman 集合文件
#[derive(Debug, Clone, Serialize)]
pub struct CollectionFile {
    pub filename: String,
    pub data: Value,
}

#[derive(Debug, Deserialize)]
struct EnvironmentFile {
    #[serde(default)]
    values: Vec<EnvironmentValue>,
}

#[derive(Debug, Deserialize)]
struct EnvironmentValue {
    key: String,
    #[serde(default)]
    value: Value,
    #[serde(default)]
    enabled: Option<bool>,
}

/// 读取目录下所有集合文件（排除环境文件），按文件名排序
///
/// 目录不存在时返回空列表；任一文件无法解析时整体失败。
pub async fn list_collections(dir: &Path) -> Result<Vec<CollectionFile>> {
    let files = json_files(dir, |name| !name.ends_with(ENVIRONMENT_FILE_SUFFIX)).await?;
    let mut collections = Vec::with_capacity(files.len());

    for (filename, path) in files {
        let content = fs::read_to_string(&path)
            .await
            .map_err(|e| PortalError::collection(format!("读取 {filename} 失败: {e}")))?;
        let data: Value = serde_json::from_str(&content)
            .map_err(|e| PortalError::collection(format!("解析 {filename} 失败: {e}")))?;
        collections.push(CollectionFile { filename, data });
    }

    info!("加载了 {} 个 API 集合", collections.len());
    Ok(collections)
}

/// 合并所有环境文件中启用的变量，后读取的文件覆盖同名变量
///
/// 无法解析的环境文件会被跳过。
pub async fn merge_environments(dir: &Path) -> Result<BTreeMap<String, Value>> {
    let files = json_files(dir, |name| name.ends_with(ENVIRONMENT_FILE_SUFFIX)).await?;
    let mut merged = BTreeMap::new();

    for (filename, path) in files {
        let parsed = fs::read_to_string(&path)
            .await
            .map_err(|e| e.to_string())
            .and_then(|content| {
                serde_json::from_str::<EnvironmentFile>(&content).map_err(|e| e.to_string())
            });
        let environment = match parsed {
            Ok(environment) => environment,
            Err(e) => {
                warn!("⚠️ 跳过无法解析的环境文件 {}: {}", filename, e);
                continue;
            }
        };

        for entry in environment.values {
            if entry.enabled == Some(false) {
                continue;
            }
            merged.insert(entry.key, entry.value);
        }
    }

    Ok(merged)
}

/// 目录下符合条件的 .json 文件，按文件名排序
async fn json_files(dir: &Path, keep: impl Fn(&str) -> bool) -> Result<Vec<(String, PathBuf)>> {
    let mut entries = match fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    let mut files = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if !fs::metadata(&path).await.is_ok_and(|m| m.is_file()) {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name.ends_with(".json") && keep(name) {
            files.push((name.to_string(), path.clone()));
        }
    }
    files.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(files)
}
