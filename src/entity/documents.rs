//! 上传文件元数据实体
//!
//! 学生照片、档案文档和校徽共用一张表，通过 kind 区分，
//! 下载凭 download_token 而非磁盘路径。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "documents")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    pub student_id: Option<i64>,
    pub kind: String,
    pub document_name: String,
    pub document_type: Option<String>,
    #[sea_orm(unique)]
    pub download_token: String,
    pub stored_name: String,
    pub file_size: i64,
    pub content_type: String,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id"
    )]
    Students,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Students.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_document(self) -> crate::models::documents::entities::Document {
        use crate::models::documents::entities::{Document, DocumentKind};
        use chrono::{DateTime, Utc};

        Document {
            id: self.id,
            student_id: self.student_id,
            kind: self
                .kind
                .parse::<DocumentKind>()
                .unwrap_or(DocumentKind::Document),
            document_name: self.document_name,
            document_type: self.document_type,
            download_token: self.download_token,
            file_size: self.file_size,
            content_type: self.content_type,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
