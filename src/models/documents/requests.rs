use serde::Deserialize;
use ts_rs::TS;

use super::entities::DocumentKind;

// 文档列表查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/document.ts")]
pub struct DocumentListParams {
    pub student_id: Option<i64>,
    pub kind: Option<DocumentKind>,
}
