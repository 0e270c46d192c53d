use serde::Serialize;
use ts_rs::TS;

use super::entities::Payment;

// 付款列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/payment.ts")]
pub struct PaymentListResponse {
    pub items: Vec<Payment>,
}

// 生成付款计划的结果
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/payment.ts")]
pub struct GeneratePaymentsResponse {
    /// 新插入的付款记录
    pub created: Vec<Payment>,
    /// 因该月已有记录而跳过的月份数
    pub skipped: i64,
}
