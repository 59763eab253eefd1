use serde::Deserialize;
use ts_rs::TS;

use crate::models::users::requests::StudentFilter;

/// 批量导出筛选条件
///
/// 四个条件独立可选，缺省即不限（原系统下拉框中的 "All"）。
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct GatherRequest {
    pub student_id: Option<i64>,
    pub year: Option<i32>,
    pub class_label: Option<String>,
    pub group_label: Option<String>,
}

impl GatherRequest {
    /// 导出筛选条件即学生目录筛选条件
    pub fn into_filter(self) -> StudentFilter {
        StudentFilter {
            student_id: self.student_id,
            year: self.year,
            class_label: self.class_label,
            group_label: self.group_label,
        }
    }
}
