use actix_multipart::Multipart;
use actix_web::{delete, get, post, web, HttpResponse};
use futures::StreamExt;
use sanitize_filename::sanitize;
use std::{fs, io::Write};

use crate::{
    config::AppConfig,
    errors::ApiError,
    models::file::{new_id, StoredFile},
};

#[derive(serde::Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub files: Vec<StoredFile>,
}

/// Persists every part of the `files` form field to the upload directory.
/// Best-effort across parts: a write failure aborts the request and files
/// stored by earlier parts remain on disk.
#[post("/upload")]
pub async fn upload_files(
    cfg: web::Data<AppConfig>,
    mut payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let mut files: Vec<StoredFile> = Vec::new();

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|_| ApiError::BadRequest("Invalid multipart".into()))?;

        if field.name() != "files" {
            continue;
        }

        let cd = field.content_disposition();
        let filename = cd
            .get_filename()
            .map(|f| sanitize(f))
            .unwrap_or_else(|| "file.bin".to_string());

        let id = new_id(&filename);
        let filepath = cfg.upload_dir.join(&id);

        let mut f = fs::File::create(&filepath).map_err(|e| {
            log::error!("create {:?} failed: {}", filepath, e);
            ApiError::Internal
        })?;
        let mut size: u64 = 0;

        while let Some(chunk) = field.next().await {
            let data = chunk.map_err(|_| ApiError::Internal)?;
            size += data.len() as u64;
            f.write_all(&data).map_err(|_| ApiError::Internal)?;
        }

        files.push(StoredFile::uploaded(id, filename, size));
    }

    Ok(HttpResponse::Ok().json(UploadResponse {
        success: true,
        files,
    }))
}

/// Enumerates the upload directory fresh on every call; no cache, no index.
/// Order is whatever the filesystem hands back.
#[get("/files")]
pub async fn list_files(cfg: web::Data<AppConfig>) -> Result<HttpResponse, ApiError> {
    let entries = fs::read_dir(&cfg.upload_dir).map_err(|_| ApiError::ReadFiles)?;

    let mut out: Vec<StoredFile> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|_| ApiError::ReadFiles)?;
        let meta = entry.metadata().map_err(|_| ApiError::ReadFiles)?;
        if !meta.is_file() {
            continue;
        }
        let id = entry.file_name().to_string_lossy().into_owned();
        out.push(StoredFile::from_metadata(id, &meta));
    }

    Ok(HttpResponse::Ok().json(out))
}

#[delete("/files/{id}")]
pub async fn delete_file(
    cfg: web::Data<AppConfig>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    // The id is the literal filename; anything that could escape the upload
    // directory fails the same way as a missing file.
    if id.contains('/') || id.contains('\\') || id == ".." {
        return Err(ApiError::DeleteFile);
    }

    let filepath = cfg.upload_dir.join(&id);
    fs::remove_file(&filepath).map_err(|_| ApiError::DeleteFile)?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "success": true })))
}
