use actix_web::{get, web, Responder};
use serde::Deserialize;

use crate::{shared::api::ApiResponse, AppState};

#[derive(Debug, Deserialize)]
struct ListReposQuery {
    #[serde(default)]
    username: String,
}

/// A failed fetch renders as "no repos", not as an error page; the section
/// is decorative.
#[get("/api/github/repos")]
pub async fn list_repos_handler(
    query: web::Query<ListReposQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.list_repos.execute(&query.username).await {
        Ok(repos) => ApiResponse::success(repos),
        Err(err) => {
            tracing::warn!("GitHub repo listing failed: {err}");
            ApiResponse::success(Vec::<()>::new())
        }
    }
}
