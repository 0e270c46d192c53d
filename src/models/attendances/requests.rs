use serde::Deserialize;
use ts_rs::TS;

// 单个学生的考勤项
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceEntry {
    pub student_id: i64,
    pub present: bool,
    pub note: Option<String>,
}

// 批量考勤登记请求：一天的整张点名表
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct RegisterAttendanceRequest {
    #[ts(type = "string")]
    pub attendance_date: chrono::NaiveDate,
    pub entries: Vec<AttendanceEntry>,
}

// 考勤列表查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceListParams {
    pub student_id: Option<i64>,
    #[ts(type = "string | null")]
    pub from: Option<chrono::NaiveDate>,
    #[ts(type = "string | null")]
    pub to: Option<chrono::NaiveDate>,
}
