use serde::Serialize;
use ts_rs::TS;

use super::entities::Student;
use crate::models::attendances::entities::Attendance;
use crate::models::common::PaginationInfo;
use crate::models::evaluations::entities::Evaluation;
use crate::models::payments::entities::Payment;

// 学生列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentListResponse {
    pub items: Vec<Student>,
    pub pagination: PaginationInfo,
}

// 学生档案汇总（基本信息 + 付款 + 考勤 + 评价）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentReportResponse {
    pub student: Student,
    pub payments: Vec<Payment>,
    pub attendances: Vec<Attendance>,
    pub evaluations: Vec<Evaluation>,
}
