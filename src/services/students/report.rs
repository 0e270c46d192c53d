use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::middlewares::RequireJWT;
use crate::models::attendances::requests::AttendanceListParams;
use crate::models::evaluations::requests::EvaluationListParams;
use crate::models::students::responses::StudentReportResponse;
use crate::models::{ApiResponse, ErrorCode};

/// 学生档案汇总：基本信息 + 付款 + 考勤 + 评价
pub async fn handle_report(
    service: &StudentService,
    id: i64,
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

    let student = match storage.get_student(user_id, id).await {
        Ok(Some(student)) => student,
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
    };

    let payments = storage.list_payments(user_id, id).await;
    let attendances = storage
        .list_attendances(
            user_id,
            AttendanceListParams {
                student_id: Some(id),
                from: None,
                to: None,
            },
        )
        .await;
    let evaluations = storage
        .list_evaluations(
            user_id,
            EvaluationListParams {
                student_id: Some(id),
                from: None,
                to: None,
            },
        )
        .await;

    match (payments, attendances, evaluations) {
        (Ok(payments), Ok(attendances), Ok(evaluations)) => {
            let response = StudentReportResponse {
                student,
                payments,
                attendances,
                evaluations,
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                response,
                "Student report retrieved successfully",
            )))
        }
        (Err(e), _, _) | (_, Err(e), _) | (_, _, Err(e)) => Ok(HttpResponse::InternalServerError()
            .json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询学生档案失败: {e}"),
            ))),
    }
}
