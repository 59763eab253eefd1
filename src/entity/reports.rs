//! 报告任务实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "reports")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub seq: i64,
    pub course_id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub year: i32,
    pub begin_at: i64,
    pub end_at: i64,
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
    pub fn into_report(self) -> crate::models::reports::entities::Report {
        use crate::models::reports::entities::Report;
        use chrono::{DateTime, Utc};

        Report {
            id: self.id,
            seq: self.seq,
            course_id: self.course_id,
            title: self.title,
            content: self.content,
            year: self.year,
            begin_at: DateTime::<Utc>::from_timestamp(self.begin_at, 0).unwrap_or_default(),
            end_at: DateTime::<Utc>::from_timestamp(self.end_at, 0).unwrap_or_default(),
        }
    }
}
