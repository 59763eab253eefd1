//! 提交生命周期集成测试
//!
//! 用内存 SQLite 存储和临时文件目录走完整的上传/替换/拒绝路径。

use std::sync::Arc;

use chrono::{Duration, Utc};
use tempfile::TempDir;

use rust_reportsys::errors::ReportSysError;
use rust_reportsys::models::reports::entities::Report;
use rust_reportsys::models::reports::requests::CreateReportRequest;
use rust_reportsys::models::submissions::entities::ArtifactKind;
use rust_reportsys::models::users::entities::{User, UserRole};
use rust_reportsys::models::users::requests::CreateUserRequest;
use rust_reportsys::services::submissions::upload::{UploadedArtifact, apply_upload, apply_uploads};
use rust_reportsys::storage::Storage;
use rust_reportsys::storage::sea_orm_storage::SeaOrmStorage;

async fn memory_storage() -> Arc<dyn Storage> {
    Arc::new(
        SeaOrmStorage::from_url(":memory:", 1, 5)
            .await
            .expect("in-memory storage"),
    )
}

async fn seed_student(storage: &Arc<dyn Storage>) -> User {
    storage
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
        .expect("seed student")
}

async fn seed_report(storage: &Arc<dyn Storage>, course_id: i64, seq: i64) -> Report {
    let now = Utc::now();
    storage
        .create_report(CreateReportRequest {
            seq,
            course_id,
            title: format!("实验 {seq}"),
            content: "按要求提交报告与代码".to_string(),
            year: 2026,
            begin_at: now - Duration::days(7),
            end_at: now + Duration::days(7),
        })
        .await
        .expect("seed report")
}

fn report_artifact(name: &str, bytes: &[u8]) -> UploadedArtifact {
    UploadedArtifact {
        kind: ArtifactKind::Report,
        original_name: name.to_string(),
        data: bytes.to_vec(),
    }
}

fn code_artifact(name: &str, bytes: &[u8]) -> UploadedArtifact {
    UploadedArtifact {
        kind: ArtifactKind::Code,
        original_name: name.to_string(),
        data: bytes.to_vec(),
    }
}

#[tokio::test]
async fn upload_derives_canonical_names_and_fills_both_slots() {
    let storage = memory_storage().await;
    let data_dir = TempDir::new().unwrap();
    let student = seed_student(&storage).await;
    let report = seed_report(&storage, 3, 2).await;
    let now = Utc::now();

    let sub = apply_upload(
        &storage,
        data_dir.path(),
        report.id,
        &student,
        &report_artifact("draft.pdf", b"report bytes"),
        now,
    )
    .await
    .unwrap();
    assert_eq!(sub.report_file.as_deref(), Some("22.3-0221234-Li-实验二.pdf"));
    assert!(data_dir.path().join("22.3-0221234-Li-实验二.pdf").exists());

    let sub = apply_upload(
        &storage,
        data_dir.path(),
        report.id,
        &student,
        &code_artifact("src.zip", b"code bytes"),
        now,
    )
    .await
    .unwrap();
    // 同一条记录，两个槽位都已占用
    assert_eq!(sub.report_file.as_deref(), Some("22.3-0221234-Li-实验二.pdf"));
    assert_eq!(
        sub.code_file.as_deref(),
        Some("22.3-0221234-Li-实验二-代码.zip")
    );
    assert!(
        data_dir
            .path()
            .join("22.3-0221234-Li-实验二-代码.zip")
            .exists()
    );

    let stored = storage
        .get_submission(report.id, student.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.id, sub.id);
}

#[tokio::test]
async fn unregistered_course_keeps_original_name_and_replaces_prior_file() {
    let storage = memory_storage().await;
    let data_dir = TempDir::new().unwrap();
    let student = seed_student(&storage).await;
    // 课程 1 未注册命名策略，保留上传时的文件名
    let report = seed_report(&storage, 1, 2).await;
    let now = Utc::now();

    apply_upload(
        &storage,
        data_dir.path(),
        report.id,
        &student,
        &report_artifact("first.pdf", b"v1"),
        now,
    )
    .await
    .unwrap();
    assert!(data_dir.path().join("first.pdf").exists());

    let sub = apply_upload(
        &storage,
        data_dir.path(),
        report.id,
        &student,
        &report_artifact("second.pdf", b"v2"),
        now,
    )
    .await
    .unwrap();

    // 旧文件被替换删除，槽位指向新文件
    assert!(!data_dir.path().join("first.pdf").exists());
    assert!(data_dir.path().join("second.pdf").exists());
    assert_eq!(sub.report_file.as_deref(), Some("second.pdf"));
}

#[tokio::test]
async fn replacing_with_missing_prior_file_still_succeeds() {
    let storage = memory_storage().await;
    let data_dir = TempDir::new().unwrap();
    let student = seed_student(&storage).await;
    let report = seed_report(&storage, 3, 2).await;
    let now = Utc::now();

    apply_upload(
        &storage,
        data_dir.path(),
        report.id,
        &student,
        &report_artifact("draft.pdf", b"v1"),
        now,
    )
    .await
    .unwrap();

    // 有人手动清理了存储目录，再次上传不应失败
    std::fs::remove_file(data_dir.path().join("22.3-0221234-Li-实验二.pdf")).unwrap();

    let sub = apply_upload(
        &storage,
        data_dir.path(),
        report.id,
        &student,
        &report_artifact("draft.pdf", b"v2"),
        now,
    )
    .await
    .unwrap();
    assert_eq!(sub.report_file.as_deref(), Some("22.3-0221234-Li-实验二.pdf"));
    assert_eq!(
        std::fs::read(data_dir.path().join("22.3-0221234-Li-实验二.pdf")).unwrap(),
        b"v2"
    );
}

#[tokio::test]
async fn upload_after_deadline_is_rejected() {
    let storage = memory_storage().await;
    let data_dir = TempDir::new().unwrap();
    let student = seed_student(&storage).await;
    let report = seed_report(&storage, 3, 2).await;

    // 截止后一秒
    let late = report.end_at + Duration::seconds(1);
    let err = apply_upload(
        &storage,
        data_dir.path(),
        report.id,
        &student,
        &report_artifact("draft.pdf", b"late"),
        late,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ReportSysError::SubmissionClosed(_)));
    assert!(storage
        .get_submission(report.id, student.id)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn upload_exactly_at_deadline_is_accepted() {
    let storage = memory_storage().await;
    let data_dir = TempDir::new().unwrap();
    let student = seed_student(&storage).await;
    let report = seed_report(&storage, 3, 2).await;

    // 截止时刻本身仍接受
    let result = apply_upload(
        &storage,
        data_dir.path(),
        report.id,
        &student,
        &report_artifact("draft.pdf", b"on time"),
        report.end_at,
    )
    .await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn wrong_extension_is_rejected() {
    let storage = memory_storage().await;
    let data_dir = TempDir::new().unwrap();
    let student = seed_student(&storage).await;
    let report = seed_report(&storage, 3, 2).await;
    let now = Utc::now();

    let err = apply_upload(
        &storage,
        data_dir.path(),
        report.id,
        &student,
        &report_artifact("archive.zip", b"not a report"),
        now,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ReportSysError::UnsupportedFileType(_)));

    let err = apply_upload(
        &storage,
        data_dir.path(),
        report.id,
        &student,
        &code_artifact("code.rar", b"not a zip"),
        now,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ReportSysError::UnsupportedFileType(_)));
}

#[tokio::test]
async fn upload_to_missing_report_is_not_found() {
    let storage = memory_storage().await;
    let data_dir = TempDir::new().unwrap();
    let student = seed_student(&storage).await;
    let now = Utc::now();

    let err = apply_upload(
        &storage,
        data_dir.path(),
        999,
        &student,
        &report_artifact("draft.pdf", b"whatever"),
        now,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ReportSysError::NotFound(_)));
}

#[tokio::test]
async fn batch_with_one_bad_artifact_persists_nothing() {
    let storage = memory_storage().await;
    let data_dir = TempDir::new().unwrap();
    let student = seed_student(&storage).await;
    let report = seed_report(&storage, 3, 2).await;
    let now = Utc::now();

    // 合法报告 + 非法代码包同批提交，整批拒绝
    let artifacts = [
        report_artifact("draft.pdf", b"report bytes"),
        code_artifact("code.rar", b"not a zip"),
    ];
    let err = apply_uploads(&storage, data_dir.path(), report.id, &student, &artifacts, now)
        .await
        .unwrap_err();
    assert!(matches!(err, ReportSysError::UnsupportedFileType(_)));

    assert!(
        storage
            .get_submission(report.id, student.id)
            .await
            .unwrap()
            .is_none()
    );
    assert!(!data_dir.path().join("22.3-0221234-Li-实验二.pdf").exists());
}

#[tokio::test]
async fn empty_batch_is_no_file_provided_and_creates_nothing() {
    let storage = memory_storage().await;
    let data_dir = TempDir::new().unwrap();
    let student = seed_student(&storage).await;
    let report = seed_report(&storage, 3, 2).await;

    let err = apply_uploads(&storage, data_dir.path(), report.id, &student, &[], Utc::now())
        .await
        .unwrap_err();
    assert!(matches!(err, ReportSysError::NoFileProvided(_)));

    assert!(
        storage
            .get_submission(report.id, student.id)
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn empty_batch_on_missing_report_is_not_found() {
    let storage = memory_storage().await;
    let data_dir = TempDir::new().unwrap();
    let student = seed_student(&storage).await;

    // 任务不存在优先于未提供文件
    let err = apply_uploads(&storage, data_dir.path(), 999, &student, &[], Utc::now())
        .await
        .unwrap_err();
    assert!(matches!(err, ReportSysError::NotFound(_)));
}
