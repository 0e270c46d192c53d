//! 路径参数安全提取器
//!
//! 在进入服务层之前完成路径参数的格式校验，
//! 非法参数直接以统一响应结构返回 400。

use actix_web::error::InternalError;
use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload};
use std::future::{Ready, ready};

use crate::models::ErrorCode;
use crate::models::common::response::ApiResponse;

fn bad_request(message: &str) -> actix_web::Error {
    let response =
        HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, message));
    InternalError::from_response(message.to_string(), response).into()
}

/// 从路径段 `{id}` 提取正整数 ID
#[derive(Debug, Clone, Copy)]
pub struct SafeIDI64(pub i64);

impl SafeIDI64 {
    pub fn into_inner(self) -> i64 {
        self.0
    }
}

impl FromRequest for SafeIDI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = match req.match_info().get("id") {
            Some(raw) => match raw.parse::<i64>() {
                Ok(id) if id > 0 => Ok(SafeIDI64(id)),
                _ => Err(bad_request("Invalid id in path")),
            },
            None => Err(bad_request("Missing id in path")),
        };
        ready(result)
    }
}

/// 从路径段 `{file_token}` 提取下载令牌
///
/// 令牌为 UUID 风格的十六进制与连字符组合，其他字符一律拒绝。
#[derive(Debug, Clone)]
pub struct SafeFileToken(pub String);

impl SafeFileToken {
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl FromRequest for SafeFileToken {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = match req.match_info().get("file_token") {
            Some(raw)
                if !raw.is_empty()
                    && raw.len() <= 64
                    && raw
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || c == '-') =>
            {
                Ok(SafeFileToken(raw.to_string()))
            }
            Some(_) => Err(bad_request("Invalid file token in path")),
            None => Err(bad_request("Missing file token in path")),
        };
        ready(result)
    }
}
