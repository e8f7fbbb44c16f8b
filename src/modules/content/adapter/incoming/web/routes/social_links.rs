use actix_web::{delete, get, put, web, Responder};
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    authz::adapter::incoming::web::admin_gate::require_admin,
    content::application::domain::entities::SocialLinkDraft,
    shared::api::{store_error, ApiResponse},
    AppState,
};

#[get("/api/social-links")]
pub async fn list_social_links_handler(data: web::Data<AppState>) -> impl Responder {
    match data.social_links.list().await {
        Ok(links) => ApiResponse::success(links),
        Err(_) => ApiResponse::internal_error(),
    }
}

#[put("/api/social-links")]
pub async fn upsert_social_link_handler(
    user: AuthenticatedUser,
    body: web::Json<SocialLinkDraft>,
    data: web::Data<AppState>,
) -> impl Responder {
    if let Err(resp) = require_admin(&user, &data).await {
        return resp;
    }

    match data.social_links.upsert(body.into_inner()).await {
        Ok(link) => ApiResponse::success(link),
        Err(err) => store_error(&err),
    }
}

#[delete("/api/social-links/{id}")]
pub async fn delete_social_link_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    if let Err(resp) = require_admin(&user, &data).await {
        return resp;
    }

    match data.social_links.remove(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(_) => ApiResponse::internal_error(),
    }
}
