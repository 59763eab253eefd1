use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::models::{
    reports::{
        entities::Report,
        requests::{CreateReportRequest, UpdateReportRequest},
    },
    submissions::entities::{ArtifactKind, Submission},
    users::{
        entities::User,
        requests::{CreateUserRequest, StudentFilter},
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户目录方法
    // 创建用户（目录管理）
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过学号/工号获取用户
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 按筛选条件列出学生，条件取交集，None 表示不限
    async fn find_students(&self, filter: StudentFilter) -> Result<Vec<User>>;

    /// 报告任务方法
    // 创建报告任务
    async fn create_report(&self, report: CreateReportRequest) -> Result<Report>;
    // 通过ID获取报告任务
    async fn get_report_by_id(&self, id: i64) -> Result<Option<Report>>;
    // 更新报告任务
    async fn update_report(&self, id: i64, update: UpdateReportRequest)
    -> Result<Option<Report>>;
    // 按次序号列出全部报告任务
    async fn list_reports(&self) -> Result<Vec<Report>>;

    /// 提交记录方法
    // 点查 (报告, 学生) 对应的提交记录
    async fn get_submission(&self, report_id: i64, student_id: i64)
    -> Result<Option<Submission>>;
    // 更新或创建提交记录的一个槽位，同时刷新最后上传时间
    async fn upsert_submission_slot(
        &self,
        report_id: i64,
        student_id: i64,
        kind: ArtifactKind,
        file_name: &str,
        uploaded_at: DateTime<Utc>,
    ) -> Result<Submission>;
    // 列出某报告的全部提交记录
    async fn list_submissions_by_report(&self, report_id: i64) -> Result<Vec<Submission>>;
    // 列出某报告下指定学生集合的提交记录
    async fn list_submissions_for_students(
        &self,
        report_id: i64,
        student_ids: &[i64],
    ) -> Result<Vec<Submission>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
