use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::path::Path;

use super::SubmissionService;
use crate::config::AppConfig;
use crate::errors::ReportSysError;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::{ARCHIVE_CONTENT_TYPE, ArchiveBuilder};

/// 学生下载自己在某报告下的提交归档
pub async fn download_archive(
    service: &SubmissionService,
    request: &HttpRequest,
    report_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "用户未登录",
            )));
        }
    };

    let submission = match storage.get_submission(report_id, user_id).await {
        Ok(Some(sub)) => sub,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::NotFound,
                "尚无提交记录",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询提交记录失败: {e}"),
                )),
            );
        }
    };

    let config = AppConfig::get();
    let data_dir = Path::new(&config.upload.dir);

    let mut builder = ArchiveBuilder::new();
    for name in submission.stored_files() {
        if let Err(e) = builder.add_stored_file(data_dir, name) {
            return Ok(archive_error_response(e));
        }
    }

    if builder.entry_count() == 0 {
        return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "提交记录没有可下载的文件",
        )));
    }

    match builder.finish() {
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

pub(super) fn archive_error_response(e: ReportSysError) -> HttpResponse {
    match e {
        ReportSysError::CorruptSubmission(msg) => {
            tracing::error!("提交记录损坏: {}", msg);
            HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(ErrorCode::CorruptSubmission, msg))
        }
        other => {
            tracing::error!("生成归档失败: {}", other);
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::ExportFailed,
                format!("生成归档失败: {other}"),
            ))
        }
    }
}
