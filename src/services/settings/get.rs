use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SettingsService;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_get(
    service: &SettingsService,
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

    match storage.get_or_create_settings(user_id).await {
        Ok(settings) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            settings,
            "Settings retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询学校设置失败: {e}"),
            )),
        ),
    }
}
