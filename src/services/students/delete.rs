use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::fs;

use super::StudentService;
use crate::config::AppConfig;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_delete(
    service: &StudentService,
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

    // 删除前收集该学生的落盘文件，行删除后尽力清理
    let stored_files = match storage.list_student_documents(user_id, id).await {
        Ok(docs) => docs,
        Err(e) => {
            tracing::warn!("Failed to list documents for student {}: {}", id, e);
            Vec::new()
        }
    };

    match storage.delete_student(user_id, id).await {
        Ok(true) => {
            // 级联已删除数据库行，这里尽力清理磁盘文件
            let upload_dir = &AppConfig::get().upload.dir;
            for doc in &stored_files {
                let path = format!("{}/{}", upload_dir, doc.stored_name);
                if let Err(e) = fs::remove_file(&path) {
                    tracing::warn!("Failed to remove stored file {}: {}", path, e);
                }
            }

            Ok(HttpResponse::Ok()
                .json(ApiResponse::<()>::success_empty("Student deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            "学生不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::StudentDeleteFailed,
                format!("删除学生失败: {e}"),
            )),
        ),
    }
}
