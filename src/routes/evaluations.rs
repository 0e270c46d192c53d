use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::evaluations::requests::{EvaluationListParams, UpsertEvaluationRequest};
use crate::services::EvaluationService;
use crate::utils::SafeIDI64;

// 懒加载的全局 EvaluationService 实例
static EVALUATION_SERVICE: Lazy<EvaluationService> = Lazy::new(EvaluationService::new_lazy);

pub async fn list_evaluations(
    req: HttpRequest,
    query: web::Query<EvaluationListParams>,
) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE.list(query.into_inner(), &req).await
}

pub async fn upsert_evaluation(
    req: HttpRequest,
    upsert_data: web::Json<UpsertEvaluationRequest>,
) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE
        .upsert(upsert_data.into_inner(), &req)
        .await
}

pub async fn delete_evaluation(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE.delete(id.into_inner(), &req).await
}

// 配置路由
pub fn configure_evaluation_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/evaluations")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_evaluations))
            .route("", web::post().to(upsert_evaluation))
            .route("/{id}", web::delete().to(delete_evaluation)),
    );
}
