use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::payments::requests::SetPaidRequest;
use crate::services::PaymentService;
use crate::utils::SafeIDI64;

// 懒加载的全局 PaymentService 实例
static PAYMENT_SERVICE: Lazy<PaymentService> = Lazy::new(PaymentService::new_lazy);

pub async fn set_payment_paid(
    req: HttpRequest,
    id: SafeIDI64,
    paid_data: web::Json<SetPaidRequest>,
) -> ActixResult<HttpResponse> {
    PAYMENT_SERVICE
        .set_paid(id.into_inner(), paid_data.into_inner(), &req)
        .await
}

pub async fn delete_payment(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    PAYMENT_SERVICE.delete(id.into_inner(), &req).await
}

// 配置路由（按学生的列表与生成接口挂在 students 路由下）
pub fn configure_payment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/payments")
            .wrap(middlewares::RequireJWT)
            .route("/{id}/paid", web::put().to(set_payment_paid))
            .route("/{id}", web::delete().to(delete_payment)),
    );
}
