use serde::Deserialize;
use ts_rs::TS;

// 写入（新建或覆盖）某学生某天的评价
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct UpsertEvaluationRequest {
    pub student_id: i64,
    #[ts(type = "string")]
    pub evaluation_date: chrono::NaiveDate,
    pub evaluation_text: String,
}

// 评价列表查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct EvaluationListParams {
    pub student_id: Option<i64>,
    #[ts(type = "string | null")]
    pub from: Option<chrono::NaiveDate>,
    #[ts(type = "string | null")]
    pub to: Option<chrono::NaiveDate>,
}
