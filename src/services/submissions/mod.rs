pub mod download;
pub mod gather;
pub mod upload;

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::submissions::requests::GatherRequest;
use crate::storage::Storage;

pub struct SubmissionService {
    storage: Option<Arc<dyn Storage>>,
}

impl SubmissionService {
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

    /// 学生上传提交工件（报告/代码，multipart）
    pub async fn upload(
        &self,
        request: &HttpRequest,
        report_id: i64,
        payload: Multipart,
    ) -> ActixResult<HttpResponse> {
        upload::handle_upload(self, request, report_id, payload).await
    }

    /// 学生下载自己的提交归档
    pub async fn download_archive(
        &self,
        request: &HttpRequest,
        report_id: i64,
    ) -> ActixResult<HttpResponse> {
        download::download_archive(self, request, report_id).await
    }

    /// 教工按筛选条件批量导出提交归档
    pub async fn gather(
        &self,
        request: &HttpRequest,
        report_id: i64,
        req: GatherRequest,
    ) -> ActixResult<HttpResponse> {
        gather::gather_submissions(self, request, report_id, req).await
    }
}
