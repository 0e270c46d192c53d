//! 请求参数反序列化错误的统一处理
//!
//! JSON 体或查询串解析失败时，返回与业务接口一致的响应结构，
//! 而不是 actix 默认的纯文本错误。

use actix_web::error::InternalError;
use actix_web::{HttpRequest, HttpResponse};
use tracing::debug;

use crate::models::ErrorCode;
use crate::models::common::response::ApiResponse;

/// JSON 请求体解析错误处理器
pub fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    req: &HttpRequest,
) -> actix_web::Error {
    debug!("JSON payload error on {}: {}", req.path(), err);
    let message = format!("Invalid JSON payload: {err}");
    let response = HttpResponse::BadRequest()
        .json(ApiResponse::error_empty(ErrorCode::BadRequest, &message));
    InternalError::from_response(message, response).into()
}

/// 查询参数解析错误处理器
pub fn query_error_handler(
    err: actix_web::error::QueryPayloadError,
    req: &HttpRequest,
) -> actix_web::Error {
    debug!("Query payload error on {}: {}", req.path(), err);
    let message = format!("Invalid query parameters: {err}");
    let response = HttpResponse::BadRequest()
        .json(ApiResponse::error_empty(ErrorCode::BadRequest, &message));
    InternalError::from_response(message, response).into()
}
