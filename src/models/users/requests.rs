use serde::Deserialize;
use ts_rs::TS;

use crate::models::users::entities::UserRole;

/// 创建用户请求（目录管理员使用）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct CreateUserRequest {
    pub id: i64,
    pub username: String,
    pub display_name: String,
    pub role: UserRole,
    pub year: Option<i32>,
    pub class_label: Option<String>,
    pub group_label: Option<String>,
}

/// 学生目录筛选条件
///
/// 每个条件独立可选，None 表示不限（"All"）。提供的条件取交集。
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct StudentFilter {
    pub student_id: Option<i64>,
    pub year: Option<i32>,
    pub class_label: Option<String>,
    pub group_label: Option<String>,
}

impl StudentFilter {
    /// 四个条件均为 None，即匹配全部学生
    pub fn match_all() -> Self {
        Self::default()
    }

    /// 是否未限定任何条件
    pub fn is_all(&self) -> bool {
        self.student_id.is_none()
            && self.year.is_none()
            && self.class_label.is_none()
            && self.group_label.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_is_all() {
        assert!(StudentFilter::match_all().is_all());
        assert!(
            !StudentFilter {
                year: Some(22),
                ..Default::default()
            }
            .is_all()
        );
    }
}
