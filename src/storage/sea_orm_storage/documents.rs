use super::SeaOrmStorage;
use crate::entity::documents::{ActiveModel, Column, Entity as Documents};
use crate::errors::{Result, SchoolAdminError};
use crate::models::documents::{entities::Document, requests::DocumentListParams};
use crate::storage::{NewDocument, StoredDocument};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 插入上传文件的元数据记录
    pub async fn insert_document_impl(&self, user_id: i64, doc: NewDocument) -> Result<Document> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            user_id: Set(user_id),
            student_id: Set(doc.student_id),
            kind: Set(doc.kind),
            document_name: Set(doc.document_name),
            document_type: Set(doc.document_type),
            download_token: Set(doc.download_token),
            stored_name: Set(doc.stored_name),
            file_size: Set(doc.file_size),
            content_type: Set(doc.content_type),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolAdminError::database_operation(format!("保存文档记录失败: {e}")))?;

        Ok(result.into_document())
    }

    /// 列出文档，可按学生和用途筛选
    pub async fn list_documents_impl(
        &self,
        user_id: i64,
        params: DocumentListParams,
    ) -> Result<Vec<Document>> {
        let mut select = Documents::find().filter(Column::UserId.eq(user_id));

        if let Some(student_id) = params.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }
        if let Some(kind) = params.kind {
            select = select.filter(Column::Kind.eq(kind.to_string()));
        }

        let documents = select
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                SchoolAdminError::database_operation(format!("查询文档列表失败: {e}"))
            })?;

        Ok(documents.into_iter().map(|m| m.into_document()).collect())
    }

    /// 某学生的全部文档记录，含落盘文件名
    pub async fn list_student_documents_impl(
        &self,
        user_id: i64,
        student_id: i64,
    ) -> Result<Vec<StoredDocument>> {
        let documents = Documents::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::StudentId.eq(student_id))
            .all(&self.db)
            .await
            .map_err(|e| {
                SchoolAdminError::database_operation(format!("查询学生文档失败: {e}"))
            })?;

        Ok(documents
            .into_iter()
            .map(|m| StoredDocument {
                stored_name: m.stored_name.clone(),
                document: m.into_document(),
            })
            .collect())
    }

    /// 通过下载令牌获取文档
    pub async fn get_document_by_token_impl(&self, token: &str) -> Result<Option<StoredDocument>> {
        let result = Documents::find()
            .filter(Column::DownloadToken.eq(token))
            .one(&self.db)
            .await
            .map_err(|e| SchoolAdminError::database_operation(format!("查询文档失败: {e}")))?;

        Ok(result.map(|m| StoredDocument {
            stored_name: m.stored_name.clone(),
            document: m.into_document(),
        }))
    }

    /// 按租户通过 ID 获取文档
    pub async fn get_document_by_id_impl(
        &self,
        user_id: i64,
        id: i64,
    ) -> Result<Option<StoredDocument>> {
        let result = Documents::find_by_id(id)
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| SchoolAdminError::database_operation(format!("查询文档失败: {e}")))?;

        Ok(result.map(|m| StoredDocument {
            stored_name: m.stored_name.clone(),
            document: m.into_document(),
        }))
    }

    /// 删除文档元数据记录
    pub async fn delete_document_impl(&self, user_id: i64, id: i64) -> Result<bool> {
        let result = Documents::delete_many()
            .filter(Column::Id.eq(id))
            .filter(Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| SchoolAdminError::database_operation(format!("删除文档失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
