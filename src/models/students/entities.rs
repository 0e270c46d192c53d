use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 学生实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct Student {
    pub id: i64,
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
    pub photo_url: Option<String>,
    pub active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
