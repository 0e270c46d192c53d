pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod report;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::students::requests::{
    CreateStudentRequest, StudentListParams, UpdateStudentRequest,
};
use crate::storage::Storage;

pub struct StudentService {
    storage: Option<Arc<dyn Storage>>,
}

impl StudentService {
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

    // 创建学生
    pub async fn create(
        &self,
        create_request: CreateStudentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::handle_create(self, create_request, request).await
    }

    // 获取单个学生
    pub async fn get(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::handle_get(self, id, request).await
    }

    // 分页列出学生
    pub async fn list(
        &self,
        params: StudentListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::handle_list(self, params, request).await
    }

    // 更新学生信息
    pub async fn update(
        &self,
        id: i64,
        update_request: UpdateStudentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::handle_update(self, id, update_request, request).await
    }

    // 删除学生及其文件
    pub async fn delete(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        delete::handle_delete(self, id, request).await
    }

    // 学生档案汇总
    pub async fn report(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        report::handle_report(self, id, request).await
    }
}
