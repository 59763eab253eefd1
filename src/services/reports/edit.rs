use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ReportService;
use crate::models::reports::requests::UpdateReportRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::naming::{ORDINAL_WORDS, ordinal_in_domain};
use crate::utils::validate_window;

pub async fn update_report(
    service: &ReportService,
    request: &HttpRequest,
    report_id: i64,
    req: UpdateReportRequest,
) -> ActixResult<HttpResponse> {
    if let Err(e) = validate_window(req.begin_at, req.end_at) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            e.message(),
        )));
    }

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

    match storage.update_report(report_id, req).await {
        Ok(Some(report)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(report, "报告任务更新成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "报告任务不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新报告任务失败: {e}"),
            )),
        ),
    }
}
