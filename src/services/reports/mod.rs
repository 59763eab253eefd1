pub mod create;
pub mod detail;
pub mod edit;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::reports::requests::{CreateReportRequest, UpdateReportRequest};
use crate::storage::Storage;

pub struct ReportService {
    storage: Option<Arc<dyn Storage>>,
}

impl ReportService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    /// 创建报告任务
    pub async fn create_report(
        &self,
        request: &HttpRequest,
        req: CreateReportRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_report(self, request, req).await
    }

    /// 获取报告详情（含当前用户自己的提交记录）
    pub async fn get_report_detail(
        &self,
        request: &HttpRequest,
        report_id: i64,
    ) -> ActixResult<HttpResponse> {
        detail::get_report_detail(self, request, report_id).await
    }

    /// 编辑报告任务
    pub async fn update_report(
        &self,
        request: &HttpRequest,
        report_id: i64,
        req: UpdateReportRequest,
    ) -> ActixResult<HttpResponse> {
        edit::update_report(self, request, report_id, req).await
    }

    /// 按次序号列出全部报告任务
    pub async fn list_reports(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_reports(self, request).await
    }
}
