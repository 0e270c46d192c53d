use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, middleware, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RateLimit};
use crate::services::FileService;
use crate::utils::SafeFileToken;

// 懒加载的全局 FileService 实例
static FILE_SERVICE: Lazy<FileService> = Lazy::new(FileService::new_lazy);

pub async fn handle_upload(
    request: HttpRequest,
    payload: actix_multipart::Multipart,
) -> ActixResult<HttpResponse> {
    FILE_SERVICE.handle_upload(&request, payload).await
}

pub async fn handle_download(
    request: HttpRequest,
    file_token: SafeFileToken,
) -> ActixResult<HttpResponse> {
    FILE_SERVICE
        .handle_download(&request, file_token.into_inner())
        .await
}

// 配置路由
//
// 下载不要求 JWT：download_token 本身即凭证，
// 照片 / 校徽地址才能直接用于 <img> 标签。
pub fn configure_file_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/files")
            .wrap(middleware::Compress::default())
            .route("/download/{file_token}", web::get().to(handle_download))
            .service(
                web::scope("/upload")
                    .wrap(RateLimit::file_upload())
                    .wrap(middlewares::RequireJWT)
                    .route("", web::post().to(handle_upload)),
            ),
    );
}
