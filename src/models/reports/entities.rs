use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct Report {
    // 唯一 ID
    pub id: i64,
    // 人类可读的次序号，驱动文件名中的序数词（"实验二"）
    pub seq: i64,
    // 所属课程 ID，决定命名策略
    pub course_id: i64,
    // 标题
    pub title: String,
    // 任务说明
    pub content: String,
    // 创建年份
    pub year: i32,
    // 提交窗口开始
    pub begin_at: chrono::DateTime<chrono::Utc>,
    // 提交窗口结束，即截止时刻（没有单独的宽限期）
    pub end_at: chrono::DateTime<chrono::Utc>,
}
