use serde::Serialize;
use ts_rs::TS;

use crate::models::students::entities::Student;

// 周内单日出勤统计（周一至周五）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct WeekdayAttendance {
    #[ts(type = "string")]
    pub date: chrono::NaiveDate,
    pub weekday: String,
    pub present: i64,
    pub absent: i64,
}

// 仪表盘统计响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct DashboardStatsResponse {
    /// 活跃学生总数
    pub total_students: i64,
    /// 最近创建的 5 名学生
    pub recent_students: Vec<Student>,
    /// 今日已登记考勤的学生数
    pub today_attendance_count: i64,
    /// 今日已写评价的学生数
    pub today_evaluation_count: i64,
    /// 本月已收款总额（分）
    pub month_paid_cents: i64,
    /// 本周（周一至周五）每日出勤
    pub week_attendance: Vec<WeekdayAttendance>,
}
