use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::PaymentService;
use crate::middlewares::RequireJWT;
use crate::models::payments::requests::SetPaidRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_set_paid(
    service: &PaymentService,
    payment_id: i64,
    set_paid_request: SetPaidRequest,
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

    match storage
        .set_payment_paid(user_id, payment_id, set_paid_request.paid)
        .await
    {
        Ok(Some(payment)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            payment,
            "Payment updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::PaymentNotFound,
            "付款记录不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新付款状态失败: {e}"),
            )),
        ),
    }
}
