//! 业务模型
//!
//! 按功能域划分：entities 为业务实体，requests/responses 为 HTTP 层结构。

pub mod common;

pub mod attendances;
pub mod auth;
pub mod dashboard;
pub mod documents;
pub mod evaluations;
pub mod payments;
pub mod settings;
pub mod students;
pub mod system;
pub mod users;

pub use common::error_code::ErrorCode;
pub use common::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

/// 应用启动时间，用于 /system/status 的运行时长
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
