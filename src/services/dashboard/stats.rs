use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::{Datelike, Duration};

use super::DashboardService;
use crate::middlewares::RequireJWT;
use crate::models::dashboard::responses::{DashboardStatsResponse, WeekdayAttendance};
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::schedule::{days_in_month, weekday_name};

/// 仪表盘统计汇总
pub async fn handle_stats(
    service: &DashboardService,
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

    let today = chrono::Utc::now().date_naive();

    let total_students = storage.count_active_students(user_id).await;
    let recent_students = storage.recent_students(user_id, 5).await;
    let today_attendance_count = storage.count_attendance_on(user_id, today).await;
    let today_evaluation_count = storage.count_evaluations_on(user_id, today).await;

    // 当月收款区间
    let month_start = today.with_day(1).unwrap_or(today);
    let month_end = today
        .with_day(days_in_month(today.year(), today.month()))
        .unwrap_or(today);
    let month_paid_cents = storage
        .sum_paid_between(user_id, month_start, month_end)
        .await;

    // 本周周一至周五的出勤 / 缺勤
    let monday = today - Duration::days(today.weekday().num_days_from_monday() as i64);
    let mut week_attendance = Vec::with_capacity(5);
    for offset in 0..5 {
        let date = monday + Duration::days(offset);
        match storage.attendance_counts_on(user_id, date).await {
            Ok((present, absent)) => week_attendance.push(WeekdayAttendance {
                date,
                weekday: weekday_name(date).to_string(),
                present,
                absent,
            }),
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("统计周出勤失败: {e}"),
                    )),
                );
            }
        }
    }

    match (
        total_students,
        recent_students,
        today_attendance_count,
        today_evaluation_count,
        month_paid_cents,
    ) {
        (
            Ok(total_students),
            Ok(recent_students),
            Ok(today_attendance_count),
            Ok(today_evaluation_count),
            Ok(month_paid_cents),
        ) => {
            let response = DashboardStatsResponse {
                total_students,
                recent_students,
                today_attendance_count,
                today_evaluation_count,
                month_paid_cents,
                week_attendance,
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                response,
                "Dashboard stats retrieved successfully",
            )))
        }
        _ => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "查询仪表盘统计失败",
            )),
        ),
    }
}
