use serde::Serialize;
use ts_rs::TS;

// 服务状态响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/system.ts")]
pub struct SystemStatusResponse {
    pub name: String,
    pub version: String,
    pub environment: String,
    /// 服务已运行秒数
    pub uptime_secs: i64,
}
