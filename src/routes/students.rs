use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::payments::requests::GeneratePaymentsRequest;
use crate::models::students::requests::{
    CreateStudentRequest, StudentListParams, UpdateStudentRequest,
};
use crate::services::{PaymentService, StudentService};
use crate::utils::SafeIDI64;

// 懒加载的全局服务实例
static STUDENT_SERVICE: Lazy<StudentService> = Lazy::new(StudentService::new_lazy);
static PAYMENT_SERVICE: Lazy<PaymentService> = Lazy::new(PaymentService::new_lazy);

pub async fn list_students(
    req: HttpRequest,
    query: web::Query<StudentListParams>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.list(query.into_inner(), &req).await
}

pub async fn create_student(
    req: HttpRequest,
    student_data: web::Json<CreateStudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.create(student_data.into_inner(), &req).await
}

pub async fn get_student(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.get(id.into_inner(), &req).await
}

pub async fn update_student(
    req: HttpRequest,
    id: SafeIDI64,
    update_data: web::Json<UpdateStudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .update(id.into_inner(), update_data.into_inner(), &req)
        .await
}

pub async fn delete_student(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.delete(id.into_inner(), &req).await
}

pub async fn student_report(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.report(id.into_inner(), &req).await
}

pub async fn list_student_payments(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    PAYMENT_SERVICE.list(id.into_inner(), &req).await
}

pub async fn generate_student_payments(
    req: HttpRequest,
    id: SafeIDI64,
    generate_data: web::Json<GeneratePaymentsRequest>,
) -> ActixResult<HttpResponse> {
    PAYMENT_SERVICE
        .generate(id.into_inner(), generate_data.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_student_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/students")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_students))
            .route("", web::post().to(create_student))
            .route("/{id}", web::get().to(get_student))
            .route("/{id}", web::put().to(update_student))
            .route("/{id}", web::delete().to(delete_student))
            .route("/{id}/report", web::get().to(student_report))
            .route("/{id}/payments", web::get().to(list_student_payments))
            .route(
                "/{id}/payments/generate",
                web::post().to(generate_student_payments),
            ),
    );
}
