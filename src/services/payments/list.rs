use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::PaymentService;
use crate::middlewares::RequireJWT;
use crate::models::payments::responses::PaymentListResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_list(
    service: &PaymentService,
    student_id: i64,
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

    match storage.list_payments(user_id, student_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            PaymentListResponse { items },
            "Payment list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询付款列表失败: {e}"),
            )),
        ),
    }
}
