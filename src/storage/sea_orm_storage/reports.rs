use super::SeaOrmStorage;
use crate::entity::reports::{ActiveModel, Column, Entity as Reports};
use crate::errors::{ReportSysError, Result};
use crate::models::reports::{
    entities::Report,
    requests::{CreateReportRequest, UpdateReportRequest},
};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建报告任务
    pub async fn create_report_impl(&self, req: CreateReportRequest) -> Result<Report> {
        let model = ActiveModel {
            seq: Set(req.seq),
            course_id: Set(req.course_id),
            title: Set(req.title),
            content: Set(req.content),
            year: Set(req.year),
            begin_at: Set(req.begin_at.timestamp()),
            end_at: Set(req.end_at.timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ReportSysError::database_operation(format!("创建报告任务失败: {e}")))?;

        Ok(result.into_report())
    }

    /// 通过 ID 获取报告任务
    pub async fn get_report_by_id_impl(&self, id: i64) -> Result<Option<Report>> {
        let result = Reports::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ReportSysError::database_operation(format!("查询报告任务失败: {e}")))?;

        Ok(result.map(|m| m.into_report()))
    }

    /// 更新报告任务
    pub async fn update_report_impl(
        &self,
        id: i64,
        update: UpdateReportRequest,
    ) -> Result<Option<Report>> {
        // 先检查任务是否存在
        let existing = self.get_report_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(id),
            seq: Set(update.seq),
            course_id: Set(update.course_id),
            title: Set(update.title),
            content: Set(update.content),
            year: Set(update.year),
            begin_at: Set(update.begin_at.timestamp()),
            end_at: Set(update.end_at.timestamp()),
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| ReportSysError::database_operation(format!("更新报告任务失败: {e}")))?;

        self.get_report_by_id_impl(id).await
    }

    /// 按次序号列出全部报告任务
    pub async fn list_reports_impl(&self) -> Result<Vec<Report>> {
        let reports = Reports::find()
            .order_by_asc(Column::Seq)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ReportSysError::database_operation(format!("查询报告列表失败: {e}")))?;

        Ok(reports.into_iter().map(|m| m.into_report()).collect())
    }
}
