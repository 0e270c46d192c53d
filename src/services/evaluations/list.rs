use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EvaluationService;
use crate::middlewares::RequireJWT;
use crate::models::evaluations::requests::EvaluationListParams;
use crate::models::evaluations::responses::EvaluationListResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_list(
    service: &EvaluationService,
    params: EvaluationListParams,
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

    match storage.list_evaluations(user_id, params).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            EvaluationListResponse { items },
            "Evaluation list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询评价列表失败: {e}"),
            )),
        ),
    }
}
