use actix_web::{put, web, HttpRequest, Responder};
use serde::Serialize;

use crate::{
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    authz::adapter::incoming::web::admin_gate::require_admin,
    media::application::ports::outgoing::UploadError,
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Serialize)]
struct UploadResponse {
    url: String,
}

/// Raw byte body; the object path comes from the tail of the URL, so
/// `PUT /api/media/gallery/17-photo.webp` writes `gallery/17-photo.webp`.
#[put("/api/media/{path:.*}")]
pub async fn upload_media_handler(
    user: AuthenticatedUser,
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Bytes,
    data: web::Data<AppState>,
) -> impl Responder {
    if let Err(resp) = require_admin(&user, &data).await {
        return resp;
    }

    let content_type = req
        .headers()
        .get(actix_web::http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("application/octet-stream");

    match data
        .upload_media
        .execute(&path, content_type, body.to_vec())
        .await
    {
        Ok(url) => ApiResponse::success(UploadResponse { url }),
        Err(UploadError::InvalidPath) => {
            ApiResponse::bad_request("INVALID_PATH", "Object path is invalid")
        }
        Err(_) => ApiResponse::internal_error(),
    }
}
