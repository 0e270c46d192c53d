pub mod delete;
pub mod generate;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::payments::requests::{GeneratePaymentsRequest, SetPaidRequest};
use crate::storage::Storage;

pub struct PaymentService {
    storage: Option<Arc<dyn Storage>>,
}

impl PaymentService {
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

    // 生成付款计划
    pub async fn generate(
        &self,
        student_id: i64,
        generate_request: GeneratePaymentsRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        generate::handle_generate(self, student_id, generate_request, request).await
    }

    // 某学生的付款记录
    pub async fn list(&self, student_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::handle_list(self, student_id, request).await
    }

    // 标记付款 / 取消付款
    pub async fn set_paid(
        &self,
        payment_id: i64,
        set_paid_request: SetPaidRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::handle_set_paid(self, payment_id, set_paid_request, request).await
    }

    // 删除付款记录
    pub async fn delete(
        &self,
        payment_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::handle_delete(self, payment_id, request).await
    }
}
