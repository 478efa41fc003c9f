//! Spreadsheet upload intake

use std::path::Path;

use axum::extract::{multipart::MultipartError, Multipart};
use axum::http::StatusCode;
use fca_shared::constants::ALLOWED_UPLOAD_EXTENSIONS;
use tracing::info;

use crate::error::ApiError;

pub const FILE_FIELD: &str = "file";

#[derive(Debug)]
pub struct Upload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Pull the `file` part out of a multipart form and check its extension
pub async fn read_upload(mut multipart: Multipart) -> Result<Upload, ApiError> {
    let mut upload: Option<Upload> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error("Failed to read field", e))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().trim().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| multipart_error("Failed to read file", e))?
            .to_vec();
        upload = Some(Upload { filename, bytes });
    }

    let upload = upload.ok_or_else(|| ApiError::BadRequest("No file uploaded".to_string()))?;
    if upload.filename.is_empty() {
        return Err(ApiError::BadRequest("No file selected".to_string()));
    }
    check_extension(&upload.filename)?;

    info!("Received upload {} ({} bytes)", upload.filename, upload.bytes.len());
    Ok(upload)
}

fn multipart_error(context: &str, e: MultipartError) -> ApiError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge("The uploaded file exceeds the upload size limit".to_string())
    } else {
        ApiError::BadRequest(format!("{}: {}", context, e))
    }
}

pub fn check_extension(filename: &str) -> Result<(), ApiError> {
    let allowed = Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            ALLOWED_UPLOAD_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
        .unwrap_or(false);

    if allowed {
        Ok(())
    } else {
        Err(ApiError::BadRequest(format!(
            "Unsupported file type: {}. Upload an .xlsx or .xls file",
            filename
        )))
    }
}
