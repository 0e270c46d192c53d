use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 上传对象的用途
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/document.ts")]
pub enum DocumentKind {
    /// 学生照片
    Photo,
    /// 学生档案文档
    Document,
    /// 学校徽标
    Logo,
}

impl DocumentKind {
    pub const PHOTO: &'static str = "photo";
    pub const DOCUMENT: &'static str = "document";
    pub const LOGO: &'static str = "logo";
}

impl<'de> Deserialize<'de> for DocumentKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentKind::Photo => write!(f, "{}", DocumentKind::PHOTO),
            DocumentKind::Document => write!(f, "{}", DocumentKind::DOCUMENT),
            DocumentKind::Logo => write!(f, "{}", DocumentKind::LOGO),
        }
    }
}

impl std::str::FromStr for DocumentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "photo" => Ok(DocumentKind::Photo),
            "document" => Ok(DocumentKind::Document),
            "logo" => Ok(DocumentKind::Logo),
            _ => Err(format!("Invalid document kind: {s}")),
        }
    }
}

// 上传文件元数据
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/document.ts")]
pub struct Document {
    pub id: i64,
    pub student_id: Option<i64>,
    pub kind: DocumentKind,
    pub document_name: String,
    /// 业务类型标签，如 "boletim"、"certidao"
    pub document_type: Option<String>,
    pub download_token: String,
    pub file_size: i64,
    pub content_type: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
