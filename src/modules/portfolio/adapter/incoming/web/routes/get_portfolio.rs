use actix_web::{get, web, Responder};

use crate::{shared::api::ApiResponse, AppState};

#[get("/api/portfolio")]
pub async fn get_portfolio_handler(data: web::Data<AppState>) -> impl Responder {
    match data.get_portfolio.execute().await {
        Ok(view) => ApiResponse::success(view),
        Err(_) => ApiResponse::internal_error(),
    }
}
