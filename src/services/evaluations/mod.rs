pub mod delete;
pub mod list;
pub mod upsert;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::evaluations::requests::{EvaluationListParams, UpsertEvaluationRequest};
use crate::storage::Storage;

pub struct EvaluationService {
    storage: Option<Arc<dyn Storage>>,
}

impl EvaluationService {
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

    // 写入某学生某天的评价
    pub async fn upsert(
        &self,
        upsert_request: UpsertEvaluationRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        upsert::handle_upsert(self, upsert_request, request).await
    }

    // 查询评价记录
    pub async fn list(
        &self,
        params: EvaluationListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::handle_list(self, params, request).await
    }

    // 删除评价
    pub async fn delete(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        delete::handle_delete(self, id, request).await
    }
}
