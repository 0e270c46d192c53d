use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 付款记录
//
// 金额以分为单位存储，避免浮点舍入。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/payment.ts")]
pub struct Payment {
    pub id: i64,
    pub student_id: i64,
    /// 参考月份的到期日期
    #[ts(type = "string")]
    pub reference_month: chrono::NaiveDate,
    pub amount_cents: i64,
    pub paid: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
