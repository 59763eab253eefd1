use super::SeaOrmStorage;
use crate::entity::report_submissions::{ActiveModel, Column, Entity as ReportSubmissions};
use crate::errors::{ReportSysError, Result};
use crate::models::submissions::entities::{ArtifactKind, Submission};
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 点查 (报告, 学生) 对应的提交记录
    pub async fn get_submission_impl(
        &self,
        report_id: i64,
        student_id: i64,
    ) -> Result<Option<Submission>> {
        let result = ReportSubmissions::find()
            .filter(Column::ReportId.eq(report_id))
            .filter(Column::StudentId.eq(student_id))
            .one(&self.db)
            .await
            .map_err(|e| ReportSysError::database_operation(format!("查询提交记录失败: {e}")))?;

        Ok(result.map(|m| m.into_submission()))
    }

    /// 更新或创建提交记录的一个槽位
    ///
    /// 提交记录以 (report_id, student_id) 唯一，一条记录同时承载报告与代码
    /// 两个槽位。写入只覆盖对应槽位并刷新最后上传时间。
    pub async fn upsert_submission_slot_impl(
        &self,
        report_id: i64,
        student_id: i64,
        kind: ArtifactKind,
        file_name: &str,
        uploaded_at: DateTime<Utc>,
    ) -> Result<Submission> {
        let existing = ReportSubmissions::find()
            .filter(Column::ReportId.eq(report_id))
            .filter(Column::StudentId.eq(student_id))
            .one(&self.db)
            .await
            .map_err(|e| ReportSysError::database_operation(format!("查询提交记录失败: {e}")))?;

        let result = match existing {
            Some(row) => {
                let mut model = ActiveModel {
                    id: Set(row.id),
                    uploaded_at: Set(uploaded_at.timestamp()),
                    ..Default::default()
                };
                match kind {
                    ArtifactKind::Report => model.report_file = Set(Some(file_name.to_string())),
                    ArtifactKind::Code => model.code_file = Set(Some(file_name.to_string())),
                }

                model.update(&self.db).await.map_err(|e| {
                    ReportSysError::database_operation(format!("更新提交记录失败: {e}"))
                })?
            }
            None => {
                let mut model = ActiveModel {
                    report_id: Set(report_id),
                    student_id: Set(student_id),
                    report_file: Set(None),
                    code_file: Set(None),
                    uploaded_at: Set(uploaded_at.timestamp()),
                    ..Default::default()
                };
                match kind {
                    ArtifactKind::Report => model.report_file = Set(Some(file_name.to_string())),
                    ArtifactKind::Code => model.code_file = Set(Some(file_name.to_string())),
                }

                model.insert(&self.db).await.map_err(|e| {
                    ReportSysError::database_operation(format!("创建提交记录失败: {e}"))
                })?
            }
        };

        Ok(result.into_submission())
    }

    /// 列出某报告的全部提交记录
    pub async fn list_submissions_by_report_impl(
        &self,
        report_id: i64,
    ) -> Result<Vec<Submission>> {
        let rows = ReportSubmissions::find()
            .filter(Column::ReportId.eq(report_id))
            .order_by_asc(Column::StudentId)
            .all(&self.db)
            .await
            .map_err(|e| ReportSysError::database_operation(format!("查询提交列表失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_submission()).collect())
    }

    /// 列出某报告下指定学生集合的提交记录
    pub async fn list_submissions_for_students_impl(
        &self,
        report_id: i64,
        student_ids: &[i64],
    ) -> Result<Vec<Submission>> {
        if student_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = ReportSubmissions::find()
            .filter(Column::ReportId.eq(report_id))
            .filter(Column::StudentId.is_in(student_ids.to_vec()))
            .order_by_asc(Column::StudentId)
            .all(&self.db)
            .await
            .map_err(|e| ReportSysError::database_operation(format!("查询提交列表失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_submission()).collect())
    }
}
