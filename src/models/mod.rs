pub mod common;
pub mod reports;
pub mod submissions;
pub mod users;

pub use common::error_code::ErrorCode;
pub use common::response::ApiResponse;

/// 程序启动时间，注入到 app data 供运行时信息使用
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
