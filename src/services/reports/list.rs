use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ReportService;
use crate::models::reports::responses::ReportListResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_reports(
    service: &ReportService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_reports().await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ReportListResponse { items },
            "获取报告列表成功",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询报告列表失败: {e}"),
            )),
        ),
    }
}
