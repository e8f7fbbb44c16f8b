use actix_web::{put, web, Responder};

use crate::{
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    authz::adapter::incoming::web::admin_gate::require_admin,
    shared::api::ApiResponse,
    site_config::application::domain::entities::SiteConfigDraft,
    AppState,
};

#[put("/api/site-config")]
pub async fn update_site_config_handler(
    user: AuthenticatedUser,
    body: web::Json<SiteConfigDraft>,
    data: web::Data<AppState>,
) -> impl Responder {
    if let Err(resp) = require_admin(&user, &data).await {
        return resp;
    }

    match data.update_site_config.execute(body.into_inner()).await {
        Ok(config) => ApiResponse::success(config),
        Err(_) => ApiResponse::internal_error(),
    }
}
