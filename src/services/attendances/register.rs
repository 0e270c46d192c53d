use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AttendanceService;
use crate::errors::SchoolAdminError;
use crate::middlewares::RequireJWT;
use crate::models::attendances::requests::RegisterAttendanceRequest;
use crate::models::attendances::responses::RegisterAttendanceResponse;
use crate::models::{ApiResponse, ErrorCode};

/// 批量登记一天的点名表
///
/// 每条记录按 (student_id, attendance_date) upsert，
/// 同一张表重复提交是幂等的。
pub async fn handle_register(
    service: &AttendanceService,
    register_request: RegisterAttendanceRequest,
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

    if register_request.entries.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Attendance entries cannot be empty",
        )));
    }

    match storage
        .upsert_attendances(
            user_id,
            register_request.attendance_date,
            &register_request.entries,
        )
        .await
    {
        Ok(saved) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            RegisterAttendanceResponse { saved },
            "Attendance registered successfully",
        ))),
        // 点名表引用了不属于当前租户的学生
        Err(SchoolAdminError::NotFound(msg)) => Ok(HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::StudentNotFound, msg))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::AttendanceRegisterFailed,
                format!("登记考勤失败: {e}"),
            )),
        ),
    }
}
