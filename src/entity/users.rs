//! 用户实体
//!
//! 学号由教务目录分配，作为主键存储，不自增。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    #[sea_orm(unique)]
    pub username: String,
    pub display_name: String,
    pub role: String,
    pub year: Option<i32>,
    pub class_label: Option<String>,
    pub group_label: Option<String>,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::report_submissions::Entity")]
    ReportSubmissions,
}

impl Related<super::report_submissions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReportSubmissions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_user(self) -> crate::models::users::entities::User {
        use crate::models::users::entities::{User, UserRole};
        use chrono::{DateTime, Utc};

        User {
            id: self.id,
            username: self.username,
            display_name: self.display_name,
            role: self.role.parse::<UserRole>().unwrap_or(UserRole::Student),
            year: self.year,
            class_label: self.class_label,
            group_label: self.group_label,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
