use axum::{
    Json,
    extract::{Multipart, Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use chrono::Utc;
use std::path::PathBuf;

use crate::{
    auth::AuthClaims,
    db::organization::{get_organization, set_image_path},
    errors::AppError,
    models::{ImageKind, Organization},
    state::AppState,
};

const ALLOWED_IMAGE_EXT: [&str; 5] = ["png", "jpg", "jpeg", "webp", "gif"];

fn media_dir() -> String {
    std::env::var("MEDIA_DIR").unwrap_or_else(|_| "media".to_string())
}

fn content_type_for(path: &str) -> &'static str {
    match path.rsplit('.').next() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        _ => "application/octet-stream",
    }
}

pub async fn upload_map_handler(
    state: State<AppState>,
    claims: AuthClaims,
    path: Path<u64>,
    multipart: Multipart,
) -> Result<Json<Organization>, (StatusCode, String)> {
    upload_image(state, claims, path, ImageKind::Map, multipart).await
}

pub async fn upload_picture_handler(
    state: State<AppState>,
    claims: AuthClaims,
    path: Path<u64>,
    multipart: Multipart,
) -> Result<Json<Organization>, (StatusCode, String)> {
    upload_image(state, claims, path, ImageKind::Picture, multipart).await
}

async fn upload_image(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    Path(organization_id): Path<u64>,
    kind: ImageKind,
    mut multipart: Multipart,
) -> Result<Json<Organization>, (StatusCode, String)> {
    if !claims.role.can_manage_organization() {
        return Err(AppError::Forbidden("forbidden".into()).to_response());
    }

    let org = get_organization(organization_id, state.redis.clone())
        .await
        .map_err(|e| e.to_response())?;

    let mut stored: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()).to_response())?
    {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let ext = file_name
            .rsplit('.')
            .next()
            .unwrap_or_default()
            .to_lowercase();
        if !ALLOWED_IMAGE_EXT.contains(&ext.as_str()) {
            return Err(AppError::BadRequest("unsupported extension".into()).to_response());
        }
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()).to_response())?;
        stored = Some((ext, bytes.to_vec()));
        break;
    }

    let (ext, bytes) =
        stored.ok_or_else(|| AppError::BadRequest("file field required".into()).to_response())?;

    let dir = PathBuf::from(media_dir()).join(kind.subdir());
    tokio::fs::create_dir_all(&dir)
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()).to_response())?;

    let file_name = format!(
        "org_{}_{}_{}.{}",
        organization_id,
        kind.as_str(),
        Utc::now().timestamp(),
        ext
    );
    let file_path = dir.join(&file_name);
    tokio::fs::write(&file_path, &bytes)
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()).to_response())?;

    let relative = format!("{}/{}", kind.subdir(), file_name);
    let updated = set_image_path(org, kind, relative, state.redis.clone())
        .await
        .map_err(|e| e.to_response())?;

    tracing::info!(
        "Stored {} image for organization {}: {}",
        kind.as_str(),
        organization_id,
        file_name
    );

    Ok(Json(updated))
}

pub async fn get_image_handler(
    State(state): State<AppState>,
    Path((organization_id, kind)): Path<(u64, String)>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let kind = ImageKind::parse(&kind).map_err(|e| e.to_response())?;

    let org = get_organization(organization_id, state.redis.clone())
        .await
        .map_err(|e| e.to_response())?;

    let relative = kind
        .path_of(&org)
        .ok_or_else(|| AppError::NotFound("image not uploaded".into()).to_response())?;

    let full_path = PathBuf::from(media_dir()).join(relative);
    let bytes = tokio::fs::read(&full_path)
        .await
        .map_err(|_| AppError::NotFound("image file missing".into()).to_response())?;

    Ok((
        [(header::CONTENT_TYPE, content_type_for(relative))],
        bytes,
    ))
}
