use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EvaluationService;
use crate::middlewares::RequireJWT;
use crate::models::evaluations::requests::UpsertEvaluationRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::schedule::weekday_name;

/// 写入某学生某天的评价
///
/// weekday 由服务端从日期推导，客户端传入的值一律忽略。
/// 同一 (student_id, evaluation_date) 重复提交覆盖评价内容。
pub async fn handle_upsert(
    service: &EvaluationService,
    upsert_request: UpsertEvaluationRequest,
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

    if upsert_request.evaluation_text.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Evaluation text cannot be empty",
        )));
    }

    // 学生必须存在且属于当前租户
    match storage.get_student(user_id, upsert_request.student_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "学生不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询学生失败: {e}"),
                )),
            );
        }
    }

    let weekday = weekday_name(upsert_request.evaluation_date);

    match storage
        .upsert_evaluation(
            user_id,
            upsert_request.student_id,
            upsert_request.evaluation_date,
            weekday,
            upsert_request.evaluation_text.trim(),
        )
        .await
    {
        Ok(evaluation) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            evaluation,
            "Evaluation saved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::EvaluationUpsertFailed,
                format!("保存评价失败: {e}"),
            )),
        ),
    }
}
