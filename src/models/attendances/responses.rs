use serde::Serialize;
use ts_rs::TS;

use super::entities::Attendance;

// 考勤列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceListResponse {
    pub items: Vec<Attendance>,
}

// 批量登记结果
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct RegisterAttendanceResponse {
    /// 本次写入（新建或覆盖）的记录数
    pub saved: i64,
}
