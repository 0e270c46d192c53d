use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use futures_util::TryStreamExt;
use futures_util::stream::StreamExt;
use std::fs;
use std::io::Write;
use std::{fs::File, path::Path};
use uuid::Uuid;

use super::FileService;
use crate::config::AppConfig;
use crate::errors::SchoolAdminError;
use crate::middlewares::RequireJWT;
use crate::models::documents::entities::DocumentKind;
use crate::models::documents::responses::FileUploadResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::NewDocument;
use crate::utils::sanitize_file_name;
use crate::utils::validate_magic_bytes;

/// 统一的上传入口
///
/// multipart 字段：`file`、`type`（photo | document | logo）、
/// `student_id`（logo 以外必填）、`document_name?`、`document_type?`。
/// 文件落盘后写入 documents 元数据行；photo / logo 额外更新
/// students.photo_url / school_settings.logo_url。
/// 元数据写入失败时删除已落盘文件，不留孤儿对象。
pub async fn handle_upload(
    service: &FileService,
    req: &HttpRequest,
    mut payload: Multipart,
) -> ActixResult<HttpResponse> {
    let config = AppConfig::get();
    let upload_dir = &config.upload.dir;
    let max_size = config.upload.max_size;
    let allowed_types = &config.upload.allowed_types;

    // 确保上传目录存在
    if !Path::new(upload_dir).exists()
        && let Err(e) = fs::create_dir_all(upload_dir)
    {
        tracing::error!("{}", SchoolAdminError::file_operation(format!("{e}")));
        return Ok(
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error_empty(
                ErrorCode::FileUploadFailed,
                "创建上传目录失败",
            )),
        );
    }

    // 文件相关信息
    let mut original_name = String::new();
    let mut file_size: i64 = 0;
    let mut file_uploaded = false;
    let mut content_type = String::new();
    let mut stored_name = String::new();

    // 文本字段
    let mut kind_raw = String::new();
    let mut student_id_raw = String::new();
    let mut document_name = String::new();
    let mut document_type = String::new();

    while let Ok(Some(mut field)) = payload.try_next().await {
        let content_disposition = field.content_disposition();
        let name = content_disposition
            .and_then(|cd| cd.get_name())
            .unwrap_or_default()
            .to_string();

        if name == "file" {
            if file_uploaded {
                // 已落盘的文件作废
                let _ = fs::remove_file(format!("{upload_dir}/{stored_name}"));
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::MultifileUploadNotAllowed,
                    "Only one file can be uploaded at a time",
                )));
            }
            file_uploaded = true;

            // 先获取原始文件名
            original_name = content_disposition
                .and_then(|cd| cd.get_filename())
                .map(sanitize_file_name)
                .unwrap_or_default();

            // 提取扩展名并校验
            let extension = Path::new(&original_name)
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| format!(".{}", ext.to_lowercase()))
                .unwrap_or_default();

            if !allowed_types.iter().any(|t| t.to_lowercase() == extension) {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::FileTypeNotAllowed,
                    "File type not allowed",
                )));
            }

            // MIME 类型仅用于存储记录，不用于校验
            content_type = field
                .content_type()
                .map(|ct| ct.to_string())
                .unwrap_or_else(|| "application/octet-stream".to_string());

            stored_name = format!("{}-{}.bin", chrono::Utc::now().timestamp(), Uuid::new_v4());
            let file_path = format!("{upload_dir}/{stored_name}");
            match store_field_to_file(&mut field, &file_path, &extension, max_size).await {
                Ok(StoreOutcome::Stored { size }) => file_size = size,
                Ok(StoreOutcome::TypeMismatch) => {
                    return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                        ErrorCode::FileTypeNotAllowed,
                        "文件内容与扩展名不匹配",
                    )));
                }
                Ok(StoreOutcome::SizeExceeded) => {
                    return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                        ErrorCode::FileSizeExceeded,
                        "File size exceeds the limit",
                    )));
                }
                Err(e) => {
                    tracing::error!("{}", SchoolAdminError::file_operation(format!("{e}")));
                    return Ok(HttpResponse::InternalServerError().json(
                        ApiResponse::<()>::error_empty(ErrorCode::FileUploadFailed, "文件写入失败"),
                    ));
                }
            }
        } else {
            let value = read_text_field(&mut field).await?;
            match name.as_str() {
                "type" => kind_raw = value,
                "student_id" => student_id_raw = value,
                "document_name" => document_name = value,
                "document_type" => document_type = value,
                _ => {}
            }
        }
    }

    let cleanup = |stored_name: &str| {
        let _ = fs::remove_file(format!("{upload_dir}/{stored_name}"));
    };

    if !file_uploaded {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::FileNotFound,
            "No file found in upload payload",
        )));
    }

    let kind: DocumentKind = match kind_raw.parse() {
        Ok(kind) => kind,
        Err(_) => {
            cleanup(&stored_name);
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                "Invalid upload type, expected photo, document or logo",
            )));
        }
    };

    let student_id: Option<i64> = if kind == DocumentKind::Logo {
        None
    } else {
        match student_id_raw.parse::<i64>() {
            Ok(id) if id > 0 => Some(id),
            _ => {
                cleanup(&stored_name);
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::BadRequest,
                    "student_id is required for photo and document uploads",
                )));
            }
        }
    };

    let storage = service.get_storage(req);

    let user_id = match RequireJWT::extract_user_id(req) {
        Some(id) => id,
        None => {
            cleanup(&stored_name);
            return Ok(
                HttpResponse::Unauthorized().json(ApiResponse::<()>::error_empty(
                    ErrorCode::Unauthorized,
                    "用户未登录",
                )),
            );
        }
    };

    // 学生必须存在且属于当前租户
    if let Some(student_id) = student_id {
        match storage.get_student(user_id, student_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                cleanup(&stored_name);
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::StudentNotFound,
                    "学生不存在",
                )));
            }
            Err(e) => {
                cleanup(&stored_name);
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("查询学生失败: {e}"),
                    )),
                );
            }
        }
    }

    let download_token = Uuid::new_v4().to_string();
    let new_document = NewDocument {
        student_id,
        kind: kind.to_string(),
        document_name: if document_name.is_empty() {
            original_name.clone()
        } else {
            document_name
        },
        document_type: (!document_type.is_empty()).then_some(document_type),
        download_token: download_token.clone(),
        stored_name: stored_name.clone(),
        file_size,
        content_type: content_type.clone(),
    };

    let document = match storage.insert_document(user_id, new_document).await {
        Ok(document) => document,
        Err(e) => {
            // 元数据写入失败，删除已落盘文件
            cleanup(&stored_name);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::FileUploadFailed,
                    format!("Failed to upload file: {e}"),
                )),
            );
        }
    };

    // photo / logo 上传同步更新对应的展示地址
    let download_url = format!("/api/v1/files/download/{download_token}");
    let side_effect = match kind {
        DocumentKind::Photo => {
            // student_id 在上面已验证存在
            match student_id {
                Some(id) => storage.set_student_photo_url(user_id, id, &download_url).await,
                None => Ok(false),
            }
        }
        DocumentKind::Logo => storage.set_settings_logo_url(user_id, &download_url).await,
        DocumentKind::Document => Ok(true),
    };
    if let Err(e) = side_effect {
        tracing::warn!("Failed to update display URL after upload: {}", e);
    }

    let response = FileUploadResponse {
        download_token: document.download_token,
        file_name: document.document_name,
        size: document.file_size,
        content_type: document.content_type,
        uploaded_at: document.created_at,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "File uploaded successfully")))
}

// 文件落盘结果
enum StoreOutcome {
    Stored { size: i64 },
    TypeMismatch,
    SizeExceeded,
}

/// 把上传流写入目标文件
///
/// 首个 chunk 校验魔术字节；校验失败、超出大小上限或
/// 中途读写出错时删除已写入的部分文件，不留孤儿对象。
async fn store_field_to_file<S, E>(
    stream: &mut S,
    file_path: &str,
    extension: &str,
    max_size: usize,
) -> std::io::Result<StoreOutcome>
where
    S: futures_util::Stream<Item = std::result::Result<actix_web::web::Bytes, E>> + Unpin,
    E: std::fmt::Display,
{
    let mut f = File::create(file_path)?;
    let mut total_size: usize = 0;
    let mut first_chunk = true;

    while let Some(chunk) = stream.next().await {
        let data = match chunk {
            Ok(data) => data,
            Err(e) => {
                let _ = fs::remove_file(file_path);
                return Err(std::io::Error::other(e.to_string()));
            }
        };

        if first_chunk {
            first_chunk = false;
            if !validate_magic_bytes(&data, extension) {
                let _ = fs::remove_file(file_path);
                return Ok(StoreOutcome::TypeMismatch);
            }
        }

        total_size += data.len();
        if total_size > max_size {
            let _ = fs::remove_file(file_path);
            return Ok(StoreOutcome::SizeExceeded);
        }
        if let Err(e) = f.write_all(&data) {
            let _ = fs::remove_file(file_path);
            return Err(e);
        }
    }

    Ok(StoreOutcome::Stored {
        size: total_size as i64,
    })
}

// 读取 multipart 文本字段
async fn read_text_field(field: &mut actix_multipart::Field) -> ActixResult<String> {
    let mut bytes = Vec::new();
    while let Some(chunk) = field.next().await {
        let data = chunk?;
        // 文本字段不应超过 1KB
        if bytes.len() + data.len() > 1024 {
            break;
        }
        bytes.extend_from_slice(&data);
    }
    Ok(String::from_utf8_lossy(&bytes).trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::web::Bytes;
    use futures_util::stream;

    const PNG_HEADER: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    fn temp_path() -> String {
        std::env::temp_dir()
            .join(format!("upload-{}.bin", Uuid::new_v4()))
            .to_string_lossy()
            .to_string()
    }

    #[tokio::test]
    async fn test_stream_error_removes_partial_file() {
        let path = temp_path();
        let chunks: Vec<Result<Bytes, String>> = vec![
            Ok(Bytes::from_static(PNG_HEADER)),
            Err("connection reset by peer".to_string()),
        ];
        let mut s = stream::iter(chunks);

        let result = store_field_to_file(&mut s, &path, ".png", 1024).await;
        assert!(result.is_err());
        assert!(!Path::new(&path).exists());
    }

    #[tokio::test]
    async fn test_size_limit_removes_partial_file() {
        let path = temp_path();
        let chunks: Vec<Result<Bytes, String>> = vec![
            Ok(Bytes::from_static(PNG_HEADER)),
            Ok(Bytes::from(vec![0u8; 64])),
        ];
        let mut s = stream::iter(chunks);

        let result = store_field_to_file(&mut s, &path, ".png", 16).await;
        assert!(matches!(result, Ok(StoreOutcome::SizeExceeded)));
        assert!(!Path::new(&path).exists());
    }

    #[tokio::test]
    async fn test_magic_mismatch_removes_file() {
        let path = temp_path();
        let chunks: Vec<Result<Bytes, String>> =
            vec![Ok(Bytes::from_static(b"definitely not a png"))];
        let mut s = stream::iter(chunks);

        let result = store_field_to_file(&mut s, &path, ".png", 1024).await;
        assert!(matches!(result, Ok(StoreOutcome::TypeMismatch)));
        assert!(!Path::new(&path).exists());
    }

    #[tokio::test]
    async fn test_valid_stream_is_stored() {
        let path = temp_path();
        let chunks: Vec<Result<Bytes, String>> = vec![
            Ok(Bytes::from_static(PNG_HEADER)),
            Ok(Bytes::from_static(b"payload")),
        ];
        let mut s = stream::iter(chunks);

        let result = store_field_to_file(&mut s, &path, ".png", 1024)
            .await
            .unwrap();
        assert!(matches!(result, StoreOutcome::Stored { size: 15 }));
        assert!(Path::new(&path).exists());
        let _ = fs::remove_file(&path);
    }
}
