use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ReportService;
use crate::models::reports::requests::CreateReportRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::naming::{ORDINAL_WORDS, ordinal_in_domain};
use crate::utils::validate_window;

pub async fn create_report(
    service: &ReportService,
    request: &HttpRequest,
    req: CreateReportRequest,
) -> ActixResult<HttpResponse> {
    // 时间窗必须非空
    if let Err(e) = validate_window(req.begin_at, req.end_at) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            e.message(),
        )));
    }

    // 次序号必须落在序数词表内，否则命名引擎会在提交期炸掉
    if !ordinal_in_domain(req.seq) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::OrdinalOutOfRange,
            format!(
                "报告次序 {} 超出允许范围 0..={}",
                req.seq,
                ORDINAL_WORDS.len() - 1
            ),
        )));
    }

    let storage = service.get_storage(request);

    match storage.create_report(req).await {
        Ok(report) => Ok(HttpResponse::Ok().json(ApiResponse::success(report, "报告任务创建成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建报告任务失败: {e}"),
            )),
        ),
    }
}
