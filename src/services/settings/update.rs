use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SettingsService;
use crate::middlewares::RequireJWT;
use crate::models::settings::requests::UpdateSettingsRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_update(
    service: &SettingsService,
    update_request: UpdateSettingsRequest,
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

    match storage.update_settings(user_id, update_request).await {
        Ok(settings) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            settings,
            "Settings updated successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新学校设置失败: {e}"),
            )),
        ),
    }
}
