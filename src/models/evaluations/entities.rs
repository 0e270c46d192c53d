use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 每日评价，每个学生每天至多一条
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct Evaluation {
    pub id: i64,
    pub student_id: i64,
    #[ts(type = "string")]
    pub evaluation_date: chrono::NaiveDate,
    /// 由 evaluation_date 推导的星期名，小写英文
    pub weekday: String,
    pub evaluation_text: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
