use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};

use crate::{
    auth::application::ports::incoming::use_cases::{LoginCommand, LoginError},
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
struct LoginResponse {
    pub access_token: String,
}

#[post("/api/auth/login")]
pub async fn login_handler(
    data: web::Data<AppState>,
    payload: web::Json<LoginRequest>,
) -> impl Responder {
    let command = LoginCommand {
        email: payload.email.clone(),
        password: payload.password.clone(),
    };

    match data.login_user.execute(command).await {
        Ok(result) => ApiResponse::success(LoginResponse {
            access_token: result.access_token,
        }),
        Err(LoginError::InvalidCredentials) => {
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }
        Err(LoginError::Infrastructure(_)) => ApiResponse::internal_error(),
    }
}
