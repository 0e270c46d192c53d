use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 学校设置，每个租户一行，首次读取时自动创建
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/settings.ts")]
pub struct SchoolSettings {
    pub id: i64,
    pub school_name: Option<String>,
    pub school_phone: Option<String>,
    pub school_email: Option<String>,
    pub school_address: Option<String>,
    pub logo_url: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
