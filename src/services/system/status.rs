use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SystemService;
use crate::models::system::responses::SystemStatusResponse;
use crate::models::{ApiResponse, AppStartTime, ErrorCode};

pub async fn handle_status(
    service: &SystemService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let config = service.get_config();

    let start_time = match request.app_data::<actix_web::web::Data<AppStartTime>>() {
        Some(start_time) => start_time.start_datetime,
        None => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "App start time not found",
                )),
            );
        }
    };

    let response = SystemStatusResponse {
        name: config.app.system_name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: config.app.environment.clone(),
        uptime_secs: (chrono::Utc::now() - start_time).num_seconds(),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "System status retrieved successfully",
    )))
}
