use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ReportService;
use crate::middlewares::RequireJWT;
use crate::models::reports::responses::ReportDetailResponse;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_report_detail(
    service: &ReportService,
    request: &HttpRequest,
    report_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let report = match storage.get_report_by_id(report_id).await {
        Ok(Some(r)) => r,
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
    };

    // 学生附带自己的提交记录，教工视角没有"我的提交"
    let my_submission = match (
        RequireJWT::extract_user_id(request),
        RequireJWT::extract_user_role(request),
    ) {
        (Some(user_id), Some(UserRole::Student)) => {
            match storage.get_submission(report_id, user_id).await {
                Ok(sub) => sub,
                Err(e) => {
                    return Ok(HttpResponse::InternalServerError().json(
                        ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            format!("查询提交记录失败: {e}"),
                        ),
                    ));
                }
            }
        }
        _ => None,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        ReportDetailResponse {
            report,
            my_submission,
        },
        "获取报告详情成功",
    )))
}
