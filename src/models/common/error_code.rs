use serde::Serialize;
use ts_rs::TS;

/// 业务错误码，随 ApiResponse.code 返回给前端
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
pub enum ErrorCode {
    Success = 0,

    // 通用
    BadRequest = 4000,
    Unauthorized = 4001,
    PermissionDenied = 4003,
    NotFound = 4004,
    InternalServerError = 5000,

    // 报告任务
    ValidationFailed = 4100,
    OrdinalOutOfRange = 4101,

    // 提交
    SubmissionClosed = 4200,
    FileTypeNotAllowed = 4201,
    NoFileProvided = 4202,
    FileSizeExceeded = 4203,
    FileUploadFailed = 4204,
    NotAStudent = 4205,

    // 导出
    CorruptSubmission = 4300,
    ExportFailed = 4301,
}
