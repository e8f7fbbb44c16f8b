use actix_web::{web, HttpResponse};

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Gate for every mutating admin route: the caller must be authenticated
/// (guaranteed by the extractor) and hold the admin role.
pub async fn require_admin(
    user: &AuthenticatedUser,
    data: &web::Data<AppState>,
) -> Result<(), HttpResponse> {
    match data
        .check_admin
        .is_admin(Some(UserId::from(user.user_id)))
        .await
    {
        Ok(true) => Ok(()),
        Ok(false) => Err(ApiResponse::forbidden(
            "NOT_ADMIN",
            "Administrator role required",
        )),
        Err(_) => Err(ApiResponse::internal_error()),
    }
}
