use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::documents::requests::DocumentListParams;
use crate::services::DocumentService;
use crate::utils::SafeIDI64;

// 懒加载的全局 DocumentService 实例
static DOCUMENT_SERVICE: Lazy<DocumentService> = Lazy::new(DocumentService::new_lazy);

pub async fn list_documents(
    req: HttpRequest,
    query: web::Query<DocumentListParams>,
) -> ActixResult<HttpResponse> {
    DOCUMENT_SERVICE.list(query.into_inner(), &req).await
}

pub async fn delete_document(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    DOCUMENT_SERVICE.delete(id.into_inner(), &req).await
}

// 配置路由
pub fn configure_document_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/documents")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_documents))
            .route("/{id}", web::delete().to(delete_document)),
    );
}
