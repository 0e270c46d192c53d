use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 学生列表查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    /// 按姓名或监护人姓名模糊搜索
    pub search: Option<String>,
    /// 仅活跃 / 仅停课学生
    pub active: Option<bool>,
    /// 按年级筛选
    pub grade: Option<String>,
}

// 学生创建请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct CreateStudentRequest {
    pub name: String,
    #[ts(type = "string | null")]
    pub birth_date: Option<chrono::NaiveDate>,
    pub guardian_name: Option<String>,
    pub whatsapp: Option<String>,
    pub email: Option<String>,
    pub school_name: Option<String>,
    pub grade: Option<String>,
    pub class_group: Option<String>,
    pub shift: Option<String>,
    pub observations: Option<String>,
}

// 学生更新请求，None 表示不修改该字段
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct UpdateStudentRequest {
    pub name: Option<String>,
    #[ts(type = "string | null")]
    pub birth_date: Option<chrono::NaiveDate>,
    pub guardian_name: Option<String>,
    pub whatsapp: Option<String>,
    pub email: Option<String>,
    pub school_name: Option<String>,
    pub grade: Option<String>,
    pub class_group: Option<String>,
    pub shift: Option<String>,
    pub observations: Option<String>,
    pub active: Option<bool>,
}
