//! 请求参数解析错误处理器
//!
//! 把 actix 默认的纯文本 4xx 错误换成统一的 JSON 响应结构。

use actix_web::error::{Error, InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse};

use crate::models::{ApiResponse, ErrorCode};

pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> Error {
    let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::BadRequest,
        format!("请求体解析失败: {err}"),
    ));
    InternalError::from_response(err, response).into()
}

pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> Error {
    let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::BadRequest,
        format!("查询参数解析失败: {err}"),
    ));
    InternalError::from_response(err, response).into()
}
