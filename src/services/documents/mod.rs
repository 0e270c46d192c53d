pub mod delete;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::documents::requests::DocumentListParams;
use crate::storage::Storage;

pub struct DocumentService {
    storage: Option<Arc<dyn Storage>>,
}

impl DocumentService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 列出文档
    pub async fn list(
        &self,
        params: DocumentListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::handle_list(self, params, request).await
    }

    // 删除文档（先删文件再删记录）
    pub async fn delete(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        delete::handle_delete(self, id, request).await
    }
}
