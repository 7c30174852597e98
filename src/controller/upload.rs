//! Image upload for restaurant galleries and menu items.

use axum::{extract::Multipart, extract::State, http::StatusCode, response::IntoResponse, Json};
use rand::Rng;
use serde::Serialize;

use entity::enums::Role;

use crate::{
    error::AppError,
    middleware::auth::{AuthGuard, Identity, Permission},
    model::api::ApiResponse,
    state::AppState,
};

const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp"];
const MAX_FILE_BYTES: usize = 5 * 1024 * 1024;
const NAME_LENGTH: usize = 16;
const NAME_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

#[derive(Serialize)]
pub struct UploadedFileDto {
    pub url: String,
}

/// Accept one image file under the `file` multipart field and store it in
/// the configured upload directory under a random name.
///
/// # Access Control
/// - `RestaurantOwner` or `Admin`
///
/// # Returns
/// - `201 Created` - Public URL path of the stored file
/// - `400 Bad Request` - Missing file field, bad extension, or file too large
pub async fn upload_image(
    State(state): State<AppState>,
    identity: Identity,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::AnyRole(&[Role::RestaurantOwner, Role::Admin])])
        .await?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| AppError::Validation(format!("Malformed multipart body: {}", err)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let extension = field
            .file_name()
            .and_then(|name| name.rsplit('.').next())
            .map(str::to_ascii_lowercase)
            .ok_or_else(|| AppError::Validation("File name has no extension".to_string()))?;

        if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
            return Err(AppError::Validation(format!(
                "File type '.{}' is not allowed",
                extension
            )));
        }

        let data = field
            .bytes()
            .await
            .map_err(|err| AppError::Validation(format!("Failed to read upload: {}", err)))?;

        if data.len() > MAX_FILE_BYTES {
            return Err(AppError::Validation(format!(
                "File exceeds the {} MB limit",
                MAX_FILE_BYTES / (1024 * 1024)
            )));
        }

        let file_name = format!("{}.{}", random_name(), extension);
        let path = state.config.upload_dir.join(&file_name);

        tokio::fs::write(&path, &data).await.map_err(|err| {
            AppError::InternalError(format!("Failed to store upload: {}", err))
        })?;

        tracing::info!(file = %file_name, bytes = data.len(), "Stored uploaded image");

        return Ok((
            StatusCode::CREATED,
            Json(ApiResponse::ok(
                UploadedFileDto {
                    url: format!("/uploads/{}", file_name),
                },
                "File uploaded",
            )),
        ));
    }

    Err(AppError::Validation(
        "Multipart body has no 'file' field".to_string(),
    ))
}

fn random_name() -> String {
    let mut rng = rand::rng();
    (0..NAME_LENGTH)
        .map(|_| NAME_CHARSET[rng.random_range(0..NAME_CHARSET.len())] as char)
        .collect()
}
