use actix_web::{delete, get, put, web, Responder};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::auth::{AuthenticatedUser, MaybeUser},
    authz::adapter::incoming::web::admin_gate::require_admin,
    blog::application::domain::entities::BlogPostDraft,
    shared::api::{store_error, ApiResponse},
    AppState,
};

#[derive(Debug, Deserialize)]
struct ListPostsQuery {
    all: Option<bool>,
}

/// Published posts for everyone; `?all=true` adds drafts but only for an
/// authenticated admin.
#[get("/api/blog/posts")]
pub async fn list_blog_posts_handler(
    user: MaybeUser,
    query: web::Query<ListPostsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let mut include_unpublished = false;
    if query.all.unwrap_or(false) {
        let Some(user) = user.0 else {
            return ApiResponse::unauthorized("UNAUTHORIZED", "Authentication required");
        };
        if let Err(resp) = require_admin(&user, &data).await {
            return resp;
        }
        include_unpublished = true;
    }

    match data.blog.list(include_unpublished).await {
        Ok(posts) => ApiResponse::success(posts),
        Err(_) => ApiResponse::internal_error(),
    }
}

#[put("/api/blog/posts")]
pub async fn upsert_blog_post_handler(
    user: AuthenticatedUser,
    body: web::Json<BlogPostDraft>,
    data: web::Data<AppState>,
) -> impl Responder {
    if let Err(resp) = require_admin(&user, &data).await {
        return resp;
    }

    match data.blog.upsert(body.into_inner()).await {
        Ok(post) => ApiResponse::success(post),
        Err(err) => store_error(&err),
    }
}

#[delete("/api/blog/posts/{id}")]
pub async fn delete_blog_post_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    if let Err(resp) = require_admin(&user, &data).await {
        return resp;
    }

    match data.blog.remove(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(_) => ApiResponse::internal_error(),
    }
}
