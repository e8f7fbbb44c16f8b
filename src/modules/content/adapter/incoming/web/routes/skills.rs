use actix_web::{delete, get, put, web, Responder};
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    authz::adapter::incoming::web::admin_gate::require_admin,
    content::application::domain::entities::SkillDraft,
    shared::api::{store_error, ApiResponse},
    AppState,
};

#[get("/api/skills")]
pub async fn list_skills_handler(data: web::Data<AppState>) -> impl Responder {
    match data.skills.list().await {
        Ok(skills) => ApiResponse::success(skills),
        Err(_) => ApiResponse::internal_error(),
    }
}

#[put("/api/skills")]
pub async fn upsert_skill_handler(
    user: AuthenticatedUser,
    body: web::Json<SkillDraft>,
    data: web::Data<AppState>,
) -> impl Responder {
    if let Err(resp) = require_admin(&user, &data).await {
        return resp;
    }

    match data.skills.upsert(body.into_inner()).await {
        Ok(skill) => ApiResponse::success(skill),
        Err(err) => store_error(&err),
    }
}

#[delete("/api/skills/{id}")]
pub async fn delete_skill_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    if let Err(resp) = require_admin(&user, &data).await {
        return resp;
    }

    match data.skills.remove(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(_) => ApiResponse::internal_error(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::json;
    use std::sync::Arc;

    use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
    use crate::content::application::domain::entities::Skill;
    use crate::tests::support::{
        app_state_builder::TestAppStateBuilder,
        stubs::{bearer, read_json, StubCheckAdminUseCase, StubSectionUseCase, StubTokenProvider},
    };

    #[actix_web::test]
    async fn empty_section_lists_as_empty_array() {
        let state = TestAppStateBuilder::default()
            .with_skills(StubSectionUseCase::listing(vec![]))
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(list_skills_handler)).await;

        let req = test::TestRequest::get().uri("/api/skills").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);

        let json = read_json(resp).await;
        assert_eq!(json["data"], json!([]));
    }

    #[actix_web::test]
    async fn admin_upsert_returns_saved_skill() {
        let saved = Skill {
            id: Uuid::new_v4(),
            name: "Rust".to_string(),
            category: "Languages".to_string(),
            icon: None,
            sort_order: 1,
        };
        let state = TestAppStateBuilder::default()
            .with_check_admin(StubCheckAdminUseCase::admin())
            .with_skills(StubSectionUseCase::echo(saved))
            .build();
        let token_provider: Arc<dyn TokenProvider + Send + Sync> =
            Arc::new(StubTokenProvider::new(Uuid::new_v4()));

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(token_provider))
                .service(upsert_skill_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/skills")
            .insert_header(bearer())
            .set_json(json!({ "name": "Rust", "category": "Languages" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);

        let json = read_json(resp).await;
        assert_eq!(json["data"]["name"], "Rust");
    }
}
