//! Photo upload storage.
//!
//! Uploads arrive as multipart forms with a single `photo` field. The file is
//! type-checked, renamed to a UUID and written under the configured upload
//! directory; the returned URL is served statically from `/uploads`.

use std::path::Path;

use axum::extract::Multipart;
use uuid::Uuid;

use crate::error::AppError;

/// Accepted content types and the extension each is stored under.
const ACCEPTED_TYPES: [(&str, &str); 2] = [("image/jpeg", "jpg"), ("image/png", "png")];

/// Stores the `photo` field of a multipart upload and returns its public URL.
///
/// The overall body size is capped by the router's body limit; this only
/// validates the content type and rejects empty files.
///
/// # Arguments
/// - `multipart` - The request's multipart body
/// - `upload_dir` - Directory the file is written into
///
/// # Returns
/// - `Ok(String)` - Public URL of the stored file (`/uploads/<uuid>.<ext>`)
/// - `Err(AppError::BadRequest)` - Missing photo field, wrong type or empty file
pub async fn store_photo(mut multipart: Multipart, upload_dir: &Path) -> Result<String, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("photo") {
            continue;
        }

        let content_type = field
            .content_type()
            .ok_or_else(|| AppError::BadRequest("Photo field has no content type".to_string()))?;

        let Some((_, extension)) = ACCEPTED_TYPES.iter().find(|(t, _)| *t == content_type) else {
            return Err(AppError::BadRequest(format!(
                "Unsupported photo type '{content_type}'; use image/jpeg or image/png"
            )));
        };

        let bytes = field.bytes().await?;
        if bytes.is_empty() {
            return Err(AppError::BadRequest("Photo file is empty".to_string()));
        }

        let filename = format!("{}.{}", Uuid::new_v4(), extension);
        tokio::fs::write(upload_dir.join(&filename), &bytes).await?;

        tracing::debug!("Stored photo {} ({} bytes)", filename, bytes.len());

        return Ok(format!("/uploads/{filename}"));
    }

    Err(AppError::BadRequest(
        "Multipart body has no 'photo' field".to_string(),
    ))
}
