use chrono::{DateTime, Utc};
use serde::Deserialize;
use ts_rs::TS;

/// 创建报告任务请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct CreateReportRequest {
    pub seq: i64,
    pub course_id: i64,
    pub title: String,
    pub content: String,
    pub year: i32,
    pub begin_at: DateTime<Utc>, // ISO 8601 格式，如 "2026-03-01T00:00:00Z"
    pub end_at: DateTime<Utc>,   // ISO 8601 格式
}

/// 更新报告任务请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct UpdateReportRequest {
    pub seq: i64,
    pub course_id: i64,
    pub title: String,
    pub content: String,
    pub year: i32,
    pub begin_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
}
