use actix_web::{delete, get, put, web, Responder};
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    authz::adapter::incoming::web::admin_gate::require_admin,
    content::application::domain::entities::EducationDraft,
    shared::api::{store_error, ApiResponse},
    AppState,
};

#[get("/api/education")]
pub async fn list_education_handler(data: web::Data<AppState>) -> impl Responder {
    match data.education.list().await {
        Ok(entries) => ApiResponse::success(entries),
        Err(_) => ApiResponse::internal_error(),
    }
}

#[put("/api/education")]
pub async fn upsert_education_handler(
    user: AuthenticatedUser,
    body: web::Json<EducationDraft>,
    data: web::Data<AppState>,
) -> impl Responder {
    if let Err(resp) = require_admin(&user, &data).await {
        return resp;
    }

    match data.education.upsert(body.into_inner()).await {
        Ok(entry) => ApiResponse::success(entry),
        Err(err) => store_error(&err),
    }
}

#[delete("/api/education/{id}")]
pub async fn delete_education_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    if let Err(resp) = require_admin(&user, &data).await {
        return resp;
    }

    match data.education.remove(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(_) => ApiResponse::internal_error(),
    }
}
