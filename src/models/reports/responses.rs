use serde::Serialize;
use ts_rs::TS;

use crate::models::reports::entities::Report;
use crate::models::submissions::entities::Submission;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct ReportListResponse {
    pub items: Vec<Report>,
}

/// 报告详情：任务本身加当前用户自己的提交记录（若有）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct ReportDetailResponse {
    pub report: Report,
    pub my_submission: Option<Submission>,
}
