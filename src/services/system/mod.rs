pub mod status;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::config::AppConfig;

pub struct SystemService;

impl SystemService {
    pub fn new_lazy() -> Self {
        Self
    }

    pub(crate) fn get_config(&self) -> &AppConfig {
        AppConfig::get()
    }

    // 服务状态
    pub async fn status(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        status::handle_status(self, request).await
    }
}
