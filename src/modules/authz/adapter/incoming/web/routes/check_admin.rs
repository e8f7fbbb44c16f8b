use actix_web::{get, web, Responder};
use serde::Serialize;

use crate::{
    auth::{
        adapter::incoming::web::extractors::auth::MaybeUser,
        application::domain::entities::UserId,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Serialize)]
struct IsAdminResponse {
    pub is_admin: bool,
}

/// Answers for anonymous callers too; a missing or invalid token is simply
/// `is_admin: false`, never a 401.
#[get("/api/auth/is-admin")]
pub async fn check_admin_handler(user: MaybeUser, data: web::Data<AppState>) -> impl Responder {
    let user_id = user.0.map(|u| UserId::from(u.user_id));

    match data.check_admin.is_admin(user_id).await {
        Ok(is_admin) => ApiResponse::success(IsAdminResponse { is_admin }),
        Err(_) => ApiResponse::internal_error(),
    }
}
