use serde::Deserialize;
use ts_rs::TS;

// 付款计划类型
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/payment.ts")]
pub enum PlanKind {
    /// 从起始月份到当年 12 月
    Monthly,
    /// 当年 1 月到 12 月
    Annual,
}

// 生成付款计划请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/payment.ts")]
pub struct GeneratePaymentsRequest {
    pub plan: PlanKind,
    /// 每月到期日，1..=31，超出月末时取月末
    pub due_day: u32,
    /// 每月金额（分）
    pub amount_cents: i64,
    /// 起始月份 "YYYY-MM"；annual 计划忽略月份部分，仅取年份
    pub start_month: String,
}

// 标记付款状态请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/payment.ts")]
pub struct SetPaidRequest {
    pub paid: bool,
}
