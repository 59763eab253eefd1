use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::path::Path;
use std::sync::Arc;

use super::SubmissionService;
use super::download::archive_error_response;
use crate::config::AppConfig;
use crate::errors::Result;
use crate::middlewares::RequireJWT;
use crate::models::submissions::requests::GatherRequest;
use crate::models::users::requests::StudentFilter;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;
use crate::utils::{ARCHIVE_CONTENT_TYPE, ArchiveBuilder};

/// 按筛选条件收集某报告的全部提交文件，打成一个归档
///
/// 任何一条提交记录引用的文件缺失都会让整批导出失败，宁可重收也不发
/// 出缺了条目的归档。
pub async fn build_gather_archive(
    storage: &Arc<dyn Storage>,
    data_dir: &Path,
    report_id: i64,
    filter: StudentFilter,
) -> Result<Vec<u8>> {
    // 不限条件时直接按报告取全量，省掉一次目录查询
    let submissions = if filter.is_all() {
        storage.list_submissions_by_report(report_id).await?
    } else {
        let students = storage.find_students(filter).await?;
        let student_ids: Vec<i64> = students.iter().map(|s| s.id).collect();
        storage
            .list_submissions_for_students(report_id, &student_ids)
            .await?
    };

    let mut builder = ArchiveBuilder::new();
    for submission in &submissions {
        for name in submission.stored_files() {
            builder.add_stored_file(data_dir, name)?;
        }
    }

    builder.finish()
}

pub async fn gather_submissions(
    service: &SubmissionService,
    request: &HttpRequest,
    report_id: i64,
    req: GatherRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if RequireJWT::extract_user_id(request).is_none() {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "用户未登录",
        )));
    }

    match storage.get_report_by_id(report_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::NotFound,
                "报告任务不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询报告任务失败: {e}"),
                )),
            );
        }
    }

    let config = AppConfig::get();
    let data_dir = Path::new(&config.upload.dir);

    match build_gather_archive(&storage, data_dir, report_id, req.into_filter()).await {
        Ok(bytes) => Ok(HttpResponse::Ok()
            .content_type(ARCHIVE_CONTENT_TYPE)
            .insert_header((
                "Content-Disposition",
                "attachment; filename=\"Archive.zip\"",
            ))
            .body(bytes)),
        Err(e) => Ok(archive_error_response(e)),
    }
}
