use crate::config::AppConfig;
use crate::storage::Storage;
use std::path::Path;
use std::sync::Arc;
use tracing::warn;

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 确保文件存储目录存在
fn ensure_upload_dir() {
    let config = AppConfig::get();
    let dir = Path::new(&config.upload.dir);
    if !dir.exists() {
        std::fs::create_dir_all(dir).expect("Failed to create upload directory");
        warn!("Created upload directory: {}", config.upload.dir);
    }
}

/// 准备服务器启动的上下文
/// 包括存储初始化与文件目录检查
pub async fn prepare_server_startup() -> StartupContext {
    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and migrations completed");

    ensure_upload_dir();

    StartupContext { storage }
}
