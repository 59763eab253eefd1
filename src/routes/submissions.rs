use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::submissions::requests::GatherRequest;
use crate::models::users::entities::UserRole;
use crate::services::SubmissionService;

// 懒加载的全局 SubmissionService 实例
static SUBMISSION_SERVICE: Lazy<SubmissionService> = Lazy::new(SubmissionService::new_lazy);

// 上传提交工件
pub async fn upload_submission(
    req: HttpRequest,
    path: web::Path<i64>, // report_id
    payload: Multipart,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .upload(&req, path.into_inner(), payload)
        .await
}

// 下载我的提交归档
pub async fn download_my_archive(
    req: HttpRequest,
    path: web::Path<i64>, // report_id
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .download_archive(&req, path.into_inner())
        .await
}

// 批量导出提交归档
pub async fn gather_submissions(
    req: HttpRequest,
    path: web::Path<i64>, // report_id
    body: web::Json<GatherRequest>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .gather(&req, path.into_inner(), body.into_inner())
        .await
}

// 配置路由
pub fn configure_submissions_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/reports/{report_id}")
            .wrap(middlewares::RequireJWT)
            // 学生提交与自助下载
            .service(
                web::resource("/submissions")
                    .route(web::post().to(upload_submission))
                    .wrap(middlewares::RequireRole::new(&UserRole::Student)),
            )
            .service(
                web::resource("/submissions/mine/archive")
                    .route(web::get().to(download_my_archive))
                    .wrap(middlewares::RequireRole::new(&UserRole::Student)),
            )
            // 批量导出 - 仅教工和管理员
            .service(
                web::resource("/gather")
                    .route(web::post().to(gather_submissions))
                    .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
            ),
    );
}
