//! 上传接口 HTTP 集成测试
//!
//! 用 actix 测试工具驱动真实路由栈（JWT 中间件 + multipart 解析），
//! 覆盖只有走到传输层才会出现的路径。

use std::sync::Arc;

use actix_web::{App, http::StatusCode, test, web};
use chrono::{Duration, Utc};

use rust_reportsys::models::reports::requests::CreateReportRequest;
use rust_reportsys::models::users::entities::UserRole;
use rust_reportsys::models::users::requests::CreateUserRequest;
use rust_reportsys::routes::configure_submissions_routes;
use rust_reportsys::storage::Storage;
use rust_reportsys::storage::sea_orm_storage::SeaOrmStorage;
use rust_reportsys::utils::jwt::JwtUtils;

async fn memory_storage() -> Arc<dyn Storage> {
    Arc::new(
        SeaOrmStorage::from_url(":memory:", 1, 5)
            .await
            .expect("in-memory storage"),
    )
}

/// 建一个学生和一个开放中的报告任务，返回 (student_id, report_id)
async fn seed(storage: &Arc<dyn Storage>) -> (i64, i64) {
    let student = storage
        .create_user(CreateUserRequest {
            id: 20221234,
            username: "li".to_string(),
            display_name: "Li".to_string(),
            role: UserRole::Student,
            year: Some(22),
            class_label: Some("3".to_string()),
            group_label: Some("A".to_string()),
        })
        .await
        .expect("seed student");

    let now = Utc::now();
    let report = storage
        .create_report(CreateReportRequest {
            seq: 2,
            course_id: 3,
            title: "实验 2".to_string(),
            content: "按要求提交报告与代码".to_string(),
            year: 2026,
            begin_at: now - Duration::days(7),
            end_at: now + Duration::days(7),
        })
        .await
        .expect("seed report");

    (student.id, report.id)
}

fn student_token(student_id: i64) -> String {
    JwtUtils::generate_access_token(student_id, "student", Duration::hours(1))
        .expect("mint access token")
}

#[actix_web::test]
async fn empty_multipart_body_returns_no_file_provided() {
    let storage = memory_storage().await;
    let (student_id, report_id) = seed(&storage).await;

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(storage.clone()))
            .configure(configure_submissions_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/reports/{report_id}/submissions"))
        .insert_header(("Authorization", format!("Bearer {}", student_token(student_id))))
        .insert_header(("Content-Type", "multipart/form-data; boundary=reqbound"))
        .set_payload("--reqbound--\r\n")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 4202);

    // 没有任何提交记录被创建
    assert!(
        storage
            .get_submission(report_id, student_id)
            .await
            .unwrap()
            .is_none()
    );
}

#[actix_web::test]
async fn malformed_multipart_body_is_a_parse_error() {
    let storage = memory_storage().await;
    let (student_id, report_id) = seed(&storage).await;

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(storage.clone()))
            .configure(configure_submissions_routes),
    )
    .await;

    // 声明了 multipart 但 body 里根本没有边界
    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/reports/{report_id}/submissions"))
        .insert_header(("Authorization", format!("Bearer {}", student_token(student_id))))
        .insert_header(("Content-Type", "multipart/form-data; boundary=reqbound"))
        .set_payload("this is not a multipart body")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 4000);

    assert!(
        storage
            .get_submission(report_id, student_id)
            .await
            .unwrap()
            .is_none()
    );
}
