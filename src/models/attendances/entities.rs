use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 考勤记录，每个学生每天至多一条
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct Attendance {
    pub id: i64,
    pub student_id: i64,
    #[ts(type = "string")]
    pub attendance_date: chrono::NaiveDate,
    pub present: bool,
    pub note: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
