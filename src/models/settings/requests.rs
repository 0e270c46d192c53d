use serde::Deserialize;
use ts_rs::TS;

// 更新学校设置，None 表示不修改该字段
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/settings.ts")]
pub struct UpdateSettingsRequest {
    pub school_name: Option<String>,
    pub school_phone: Option<String>,
    pub school_email: Option<String>,
    pub school_address: Option<String>,
}
