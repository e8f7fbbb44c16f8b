use actix_web::{get, web, Responder};

use crate::{shared::api::ApiResponse, AppState};

/// Public read. An unseeded site returns `data: null` rather than a 404 so
/// the renderer can fall back to defaults.
#[get("/api/site-config")]
pub async fn get_site_config_handler(data: web::Data<AppState>) -> impl Responder {
    match data.get_site_config.execute().await {
        Ok(config) => ApiResponse::success(config),
        Err(_) => ApiResponse::internal_error(),
    }
}
