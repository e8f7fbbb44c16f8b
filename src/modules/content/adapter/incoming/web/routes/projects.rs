use actix_web::{delete, get, put, web, Responder};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    authz::adapter::incoming::web::admin_gate::require_admin,
    content::application::domain::entities::ProjectDraft,
    shared::api::{store_error, ApiResponse},
    AppState,
};

#[derive(Debug, Deserialize)]
struct ListProjectsQuery {
    featured: Option<bool>,
}

#[get("/api/projects")]
pub async fn list_projects_handler(
    query: web::Query<ListProjectsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.projects.list().await {
        Ok(projects) => {
            let projects = if query.featured.unwrap_or(false) {
                projects.into_iter().filter(|p| p.featured).collect()
            } else {
                projects
            };
            ApiResponse::success(projects)
        }
        Err(_) => ApiResponse::internal_error(),
    }
}

#[put("/api/projects")]
pub async fn upsert_project_handler(
    user: AuthenticatedUser,
    body: web::Json<ProjectDraft>,
    data: web::Data<AppState>,
) -> impl Responder {
    if let Err(resp) = require_admin(&user, &data).await {
        return resp;
    }

    match data.projects.upsert(body.into_inner()).await {
        Ok(project) => ApiResponse::success(project),
        Err(err) => store_error(&err),
    }
}

#[delete("/api/projects/{id}")]
pub async fn delete_project_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    if let Err(resp) = require_admin(&user, &data).await {
        return resp;
    }

    match data.projects.remove(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(_) => ApiResponse::internal_error(),
    }
}
