use actix_web::{post, web, Responder};
use serde::Deserialize;

use crate::{
    auth::{
        adapter::incoming::web::extractors::auth::AuthenticatedUser,
        application::domain::entities::UserId,
        application::ports::incoming::use_cases::{
            UpdateCredentialsCommand, UpdateCredentialsError,
        },
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
struct UpdateCredentialsRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[post("/api/auth/account")]
pub async fn update_credentials_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: web::Json<UpdateCredentialsRequest>,
) -> impl Responder {
    let command = UpdateCredentialsCommand {
        user_id: UserId::from(user.user_id),
        email: payload.email.clone(),
        password: payload.password.clone(),
    };

    match data.update_credentials.execute(command).await {
        Ok(()) => ApiResponse::no_content(),
        Err(UpdateCredentialsError::EmptyUpdate) => {
            ApiResponse::bad_request("EMPTY_UPDATE", "Provide an email or a password")
        }
        Err(UpdateCredentialsError::PasswordTooShort(min)) => ApiResponse::bad_request(
            "PASSWORD_TOO_SHORT",
            &format!("Password must be at least {} characters", min),
        ),
        Err(UpdateCredentialsError::Infrastructure(_)) => ApiResponse::internal_error(),
    }
}
