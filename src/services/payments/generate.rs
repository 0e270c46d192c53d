use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::HashSet;

use super::PaymentService;
use crate::middlewares::RequireJWT;
use crate::models::payments::requests::{GeneratePaymentsRequest, PlanKind};
use crate::models::payments::responses::GeneratePaymentsResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::schedule;

/// 生成某学生的付款计划
///
/// monthly 计划覆盖起始月至当年 12 月，annual 计划覆盖当年 1 月至 12 月。
/// 每月一条记录，到期日超出月末时取月末；已有记录的月份跳过。
/// (student_id, reference_month) 唯一索引兜底并发下的重复插入。
pub async fn handle_generate(
    service: &PaymentService,
    student_id: i64,
    generate_request: GeneratePaymentsRequest,
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

    // 学生必须存在且属于当前租户
    match storage.get_student(user_id, student_id).await {
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

    if generate_request.amount_cents <= 0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::PaymentInvalidRange,
            "Amount must be positive",
        )));
    }

    let (year, month) = match schedule::parse_month(&generate_request.start_month) {
        Ok(parsed) => parsed,
        Err(e) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::PaymentInvalidRange,
                format!("Invalid start month: {e}"),
            )));
        }
    };

    let (start, end) = match generate_request.plan {
        PlanKind::Monthly => ((year, month), (year, 12)),
        PlanKind::Annual => ((year, 1), (year, 12)),
    };

    let due_dates = match schedule::monthly_due_dates(start, end, generate_request.due_day) {
        Ok(dates) => dates,
        Err(e) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::PaymentInvalidRange,
                format!("Invalid schedule: {e}"),
            )));
        }
    };

    // 已有记录的月份跳过
    let existing: HashSet<chrono::NaiveDate> =
        match storage.list_payment_months(user_id, student_id).await {
            Ok(months) => months.into_iter().collect(),
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("查询付款月份失败: {e}"),
                    )),
                );
            }
        };

    let to_insert = schedule::filter_existing(due_dates.clone(), &existing);
    let skipped = (due_dates.len() - to_insert.len()) as i64;

    match storage
        .insert_payments(
            user_id,
            student_id,
            &to_insert,
            generate_request.amount_cents,
        )
        .await
    {
        Ok(created) => {
            tracing::info!(
                "Generated {} payment rows for student {} ({} skipped)",
                created.len(),
                student_id,
                skipped
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                GeneratePaymentsResponse { created, skipped },
                "Payment schedule generated successfully",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::PaymentGenerationFailed,
                format!("生成付款计划失败: {e}"),
            )),
        ),
    }
}
