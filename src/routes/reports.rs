use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::reports::requests::{CreateReportRequest, UpdateReportRequest};
use crate::models::users::entities::UserRole;
use crate::services::ReportService;

// 懒加载的全局 ReportService 实例
static REPORT_SERVICE: Lazy<ReportService> = Lazy::new(ReportService::new_lazy);

// 列出报告任务
pub async fn list_reports(req: HttpRequest) -> ActixResult<HttpResponse> {
    REPORT_SERVICE.list_reports(&req).await
}

// 创建报告任务
pub async fn create_report(
    req: HttpRequest,
    body: web::Json<CreateReportRequest>,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE.create_report(&req, body.into_inner()).await
}

// 获取报告详情
pub async fn get_report(req: HttpRequest, path: web::Path<i64>) -> ActixResult<HttpResponse> {
    REPORT_SERVICE
        .get_report_detail(&req, path.into_inner())
        .await
}

// 编辑报告任务
pub async fn update_report(
    req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<UpdateReportRequest>,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE
        .update_report(&req, path.into_inner(), body.into_inner())
        .await
}

// 配置路由
pub fn configure_reports_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/reports")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 报告列表 - 所有登录用户可访问
                    .route(web::get().to(list_reports))
                    // 发布报告 - 仅教工和管理员
                    .route(
                        web::post()
                            .to(create_report)
                            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                    ),
            )
            .service(
                web::resource("/{id}")
                    // 报告详情 - 所有登录用户可访问
                    .route(web::get().to(get_report))
                    // 编辑报告 - 仅教工和管理员
                    .route(
                        web::put()
                            .to(update_report)
                            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                    ),
            ),
    );
}
