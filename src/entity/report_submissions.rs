//! 提交记录实体
//!
//! 每个 (报告, 学生) 至多一行，由唯一索引保证。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "report_submissions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub report_id: i64,
    pub student_id: i64,
    pub report_file: Option<String>,
    pub code_file: Option<String>,
    pub uploaded_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::reports::Entity",
        from = "Column::ReportId",
        to = "super::reports::Column::Id"
    )]
    Report,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::StudentId",
        to = "super::users::Column::Id"
    )]
    Student,
}

impl Related<super::reports::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Report.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_submission(self) -> crate::models::submissions::entities::Submission {
        use crate::models::submissions::entities::Submission;
        use chrono::{DateTime, Utc};

        Submission {
            id: self.id,
            report_id: self.report_id,
            student_id: self.student_id,
            report_file: self.report_file,
            code_file: self.code_file,
            uploaded_at: DateTime::<Utc>::from_timestamp(self.uploaded_at, 0).unwrap_or_default(),
        }
    }
}
