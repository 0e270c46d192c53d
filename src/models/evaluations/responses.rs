use serde::Serialize;
use ts_rs::TS;

use super::entities::Evaluation;

// 评价列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct EvaluationListResponse {
    pub items: Vec<Evaluation>,
}
