use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::DocumentService;
use crate::middlewares::RequireJWT;
use crate::models::documents::responses::DocumentListResponse;
use crate::models::{ApiResponse, ErrorCode, documents::requests::DocumentListParams};

pub async fn handle_list(
    service: &DocumentService,
    params: DocumentListParams,
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

    match storage.list_documents(user_id, params).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            DocumentListResponse { items },
            "Document list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询文档列表失败: {e}"),
            )),
        ),
    }
}
