use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::fs;
use std::path::Path;

use super::DocumentService;
use crate::config::AppConfig;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode};

/// 删除文档：先删落盘文件，再删元数据行
pub async fn handle_delete(
    service: &DocumentService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    let stored = match storage.get_document_by_id(user_id, id).await {
        Ok(Some(stored)) => stored,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::DocumentNotFound,
                "文档不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询文档失败: {e}"),
                )),
            );
        }
    };

    let upload_dir = &AppConfig::get().upload.dir;
    let file_path = format!("{}/{}", upload_dir, stored.stored_name);
    if Path::new(&file_path).exists()
        && let Err(e) = fs::remove_file(&file_path)
    {
        tracing::warn!("Failed to remove stored file {}: {}", file_path, e);
    }

    match storage.delete_document(user_id, id).await {
        Ok(true) => Ok(HttpResponse::Ok()
            .json(ApiResponse::<()>::success_empty("Document deleted successfully"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::DocumentNotFound,
            "文档不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("删除文档失败: {e}"),
            )),
        ),
    }
}
