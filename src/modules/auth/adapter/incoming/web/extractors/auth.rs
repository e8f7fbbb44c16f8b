use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};
use uuid::Uuid;

use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::shared::api::ApiResponse;

/// Bearer-token identity; extraction fails the request when the token is
/// missing or invalid.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn verify_bearer(req: &HttpRequest) -> Result<AuthenticatedUser, HttpResponse> {
    let token_provider = req
        .app_data::<actix_web::web::Data<Arc<dyn TokenProvider + Send + Sync>>>()
        .ok_or_else(ApiResponse::internal_error)?;

    let token = extract_token_from_header(req).ok_or_else(|| {
        ApiResponse::unauthorized(
            "MISSING_AUTH_HEADER",
            "Missing or invalid authorization header",
        )
    })?;

    match token_provider.verify_token(&token) {
        Ok(claims) if claims.token_type == "access" => Ok(AuthenticatedUser {
            user_id: claims.sub,
        }),
        Ok(_) => Err(ApiResponse::unauthorized(
            "INVALID_TOKEN_TYPE",
            "Invalid token type",
        )),
        Err(_) => Err(ApiResponse::unauthorized(
            "INVALID_TOKEN",
            "Invalid or expired token",
        )),
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(verify_bearer(req).map_err(create_api_error))
    }
}

/// Tolerant variant for routes that must answer for anonymous callers too
/// (the is-admin probe). Never rejects; a missing or bad token is `None`.
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<AuthenticatedUser>);

impl FromRequest for MaybeUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(MaybeUser(verify_bearer(req).ok())))
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}
