use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::{DateTime, Utc};
use futures_util::TryStreamExt;
use futures_util::stream::StreamExt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use super::SubmissionService;
use crate::config::AppConfig;
use crate::errors::{ReportSysError, Result};
use crate::middlewares::RequireJWT;
use crate::models::reports::entities::Report;
use crate::models::submissions::entities::{ArtifactKind, Submission};
use crate::models::users::entities::{User, UserRole};
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;
use crate::utils::{derive_name, is_within_window};

/// 一次上传中解析出的单个工件
pub struct UploadedArtifact {
    pub kind: ArtifactKind,
    pub original_name: String,
    pub data: Vec<u8>,
}

impl UploadedArtifact {
    fn extension(&self) -> String {
        Path::new(&self.original_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .unwrap_or_default()
    }
}

/// 把一批工件写入某学生在某报告下的提交记录
///
/// 校验顺序固定：任务存在 → 窗口未关闭 → 至少一个工件 → 全部扩展名
/// 合法。所有校验通过之前不落任何数据：一次请求里混入一个非法工件时，
/// 合法的那个也不会被持久化。之后逐个落盘，每个工件写入新字节、清理
/// 该槽位的旧文件（旧文件缺失不算错），最后更新提交记录。
pub async fn apply_uploads(
    storage: &Arc<dyn Storage>,
    data_dir: &Path,
    report_id: i64,
    student: &User,
    artifacts: &[UploadedArtifact],
    now: DateTime<Utc>,
) -> Result<Submission> {
    let report = storage
        .get_report_by_id(report_id)
        .await?
        .ok_or_else(|| ReportSysError::not_found(format!("报告任务 {report_id} 不存在")))?;

    if !is_within_window(now, report.end_at) {
        return Err(ReportSysError::submission_closed(format!(
            "报告任务 {} 已于 {} 截止",
            report_id, report.end_at
        )));
    }

    if artifacts.is_empty() {
        return Err(ReportSysError::no_file_provided("报告与代码至少提供一个"));
    }

    // 整批先校验扩展名，任一工件不合法则整个请求无副作用
    let mut extensions = Vec::with_capacity(artifacts.len());
    for artifact in artifacts {
        let extension = artifact.extension();
        if !artifact.kind.accepts_extension(&extension) {
            return Err(ReportSysError::unsupported_file_type(format!(
                "{} 槽位不接受 .{} 文件，允许: {}",
                artifact.kind,
                extension,
                artifact.kind.allowed_extensions().join(", ")
            )));
        }
        extensions.push(extension);
    }

    let mut submission = None;
    for (artifact, extension) in artifacts.iter().zip(&extensions) {
        submission =
            Some(persist_artifact(storage, data_dir, &report, student, artifact, extension, now).await?);
    }

    submission.ok_or_else(|| ReportSysError::no_file_provided("报告与代码至少提供一个"))
}

/// 单工件入口，批量路径的退化情形
pub async fn apply_upload(
    storage: &Arc<dyn Storage>,
    data_dir: &Path,
    report_id: i64,
    student: &User,
    artifact: &UploadedArtifact,
    now: DateTime<Utc>,
) -> Result<Submission> {
    apply_uploads(
        storage,
        data_dir,
        report_id,
        student,
        std::slice::from_ref(artifact),
        now,
    )
    .await
}

/// 落盘一个已通过校验的工件并更新对应槽位
async fn persist_artifact(
    storage: &Arc<dyn Storage>,
    data_dir: &Path,
    report: &Report,
    student: &User,
    artifact: &UploadedArtifact,
    extension: &str,
    now: DateTime<Utc>,
) -> Result<Submission> {
    // 推导规范文件名；课程未注册命名策略或目录信息不全时保留原始文件名
    let derived = match student.student_profile() {
        Some(profile) => {
            derive_name(report.course_id, artifact.kind, &profile, report.seq, extension)?
        }
        None => None,
    };
    let file_name = derived.unwrap_or_else(|| artifact.original_name.clone());

    let existing = storage.get_submission(report.id, student.id).await?;

    // 先写新文件再清理旧文件，崩溃时槽位不会指向从未写入的文件
    fs::write(data_dir.join(&file_name), &artifact.data)?;

    // 尽力删掉该槽位之前的存储文件，文件已不在不算错误
    if let Some(old_name) = existing.as_ref().and_then(|s| s.slot(artifact.kind))
        && old_name != file_name
    {
        match fs::remove_file(data_dir.join(old_name)) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
    }

    storage
        .upsert_submission_slot(report.id, student.id, artifact.kind, &file_name, now)
        .await
}

pub async fn handle_upload(
    service: &SubmissionService,
    request: &HttpRequest,
    report_id: i64,
    mut payload: Multipart,
) -> ActixResult<HttpResponse> {
    let config = AppConfig::get();
    let data_dir = Path::new(&config.upload.dir);
    let max_size = config.upload.max_size;

    let user = match RequireJWT::extract_user(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "用户未登录",
            )));
        }
    };

    if user.role != UserRole::Student {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::NotAStudent,
            "只有学生可以提交",
        )));
    }

    // 解析 multipart：字段名即槽位名（report / code）
    let mut artifacts: Vec<UploadedArtifact> = Vec::new();

    loop {
        let mut field = match payload.try_next().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                // 流坏掉不等于没传文件，按解析失败报告
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::BadRequest,
                    format!("上传数据解析失败: {e}"),
                )));
            }
        };

        let content_disposition = field.content_disposition();
        let field_name = content_disposition
            .and_then(|cd| cd.get_name())
            .unwrap_or_default()
            .to_string();

        let kind = match field_name.as_str() {
            "report" => ArtifactKind::Report,
            "code" => ArtifactKind::Code,
            _ => continue,
        };

        let original_name = content_disposition
            .and_then(|cd| cd.get_filename())
            .map(|s| s.to_string())
            .unwrap_or_default();

        let mut data: Vec<u8> = Vec::new();
        while let Some(chunk) = field.next().await {
            let bytes = match chunk {
                Ok(bytes) => bytes,
                Err(e) => {
                    return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                        ErrorCode::BadRequest,
                        format!("上传数据解析失败: {e}"),
                    )));
                }
            };
            if data.len() + bytes.len() > max_size {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::FileSizeExceeded,
                    "文件大小超出限制",
                )));
            }
            data.extend_from_slice(&bytes);
        }

        // 空字段（未选择文件）视作未提供该槽位
        if original_name.is_empty() && data.is_empty() {
            continue;
        }

        artifacts.push(UploadedArtifact {
            kind,
            original_name,
            data,
        });
    }

    // 确保存储目录存在
    if !artifacts.is_empty()
        && !data_dir.exists()
        && let Err(e) = fs::create_dir_all(data_dir)
    {
        tracing::error!("{}", ReportSysError::file_operation(format!("{e}")));
        return Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::FileUploadFailed,
                "创建存储目录失败",
            )),
        );
    }

    let storage = service.get_storage(request);

    match apply_uploads(&storage, data_dir, report_id, &user, &artifacts, Utc::now()).await {
        Ok(sub) => Ok(HttpResponse::Ok().json(ApiResponse::success(sub, "提交成功"))),
        Err(e) => Ok(upload_error_response(e)),
    }
}

/// 提交流程错误到 HTTP 响应的映射
fn upload_error_response(e: ReportSysError) -> HttpResponse {
    match e {
        ReportSysError::NotFound(_) => HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "报告任务不存在",
        )),
        ReportSysError::SubmissionClosed(msg) => HttpResponse::Forbidden()
            .json(ApiResponse::error_empty(ErrorCode::SubmissionClosed, msg)),
        ReportSysError::UnsupportedFileType(msg) => HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::FileTypeNotAllowed, msg)),
        ReportSysError::NoFileProvided(msg) => HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::NoFileProvided, msg)),
        other => {
            tracing::error!("提交失败: {}", other);
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::FileUploadFailed,
                format!("提交失败: {other}"),
            ))
        }
    }
}
