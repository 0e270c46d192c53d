//! 配置管理
//!
//! 配置加载顺序：config.toml -> config.<env>.toml -> SCHOOLADMIN_* 环境变量。

mod r#impl;
mod structs;

pub use structs::*;
