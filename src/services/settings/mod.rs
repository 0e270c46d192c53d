pub mod get;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::settings::requests::UpdateSettingsRequest;
use crate::storage::Storage;

pub struct SettingsService {
    storage: Option<Arc<dyn Storage>>,
}

impl SettingsService {
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

    // 读取学校设置（首次访问创建空行）
    pub async fn get(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::handle_get(self, request).await
    }

    // 更新学校设置
    pub async fn update(
        &self,
        update_request: UpdateSettingsRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::handle_update(self, update_request, request).await
    }
}
