use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 用户角色
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub enum UserRole {
    Student, // 学生
    Staff,   // 教师/助教
    Admin,   // 管理员
}

impl UserRole {
    pub const STUDENT: &'static str = "student";
    pub const STAFF: &'static str = "staff";
    pub const ADMIN: &'static str = "admin";

    pub fn staff_roles() -> &'static [&'static UserRole] {
        &[&Self::Staff, &Self::Admin]
    }
    pub fn all_roles() -> &'static [&'static UserRole] {
        &[&Self::Student, &Self::Staff, &Self::Admin]
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            UserRole::STUDENT => Ok(UserRole::Student),
            UserRole::STAFF => Ok(UserRole::Staff),
            UserRole::ADMIN => Ok(UserRole::Admin),
            _ => Err(serde::de::Error::custom(format!(
                "无效的用户角色: '{s}'. 支持的角色: student, staff, admin"
            ))),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Student => write!(f, "{}", UserRole::STUDENT),
            UserRole::Staff => write!(f, "{}", UserRole::STAFF),
            UserRole::Admin => write!(f, "{}", UserRole::ADMIN),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(UserRole::Student),
            "staff" => Ok(UserRole::Staff),
            "admin" => Ok(UserRole::Admin),
            _ => Err(format!("Invalid user role: {s}")),
        }
    }
}

// 用户实体
//
// id 即学号（如 20221234），由教务目录分配。年级/班级/分组仅学生有值。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub display_name: String,
    pub role: UserRole,
    pub year: Option<i32>,
    pub class_label: Option<String>,
    pub group_label: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 学生视图：命名引擎和提交流程需要的目录字段
#[derive(Debug, Clone)]
pub struct StudentProfile {
    pub id: i64,
    pub name: String,
    pub year: i32,
    pub class_label: String,
}

impl User {
    /// 投影为学生视图；教工账号没有年级/班级信息，返回 None
    pub fn student_profile(&self) -> Option<StudentProfile> {
        if self.role != UserRole::Student {
            return None;
        }
        Some(StudentProfile {
            id: self.id,
            name: self.display_name.clone(),
            year: self.year?,
            class_label: self.class_label.clone()?,
        })
    }
}
