use actix_web::{delete, get, put, web, Responder};
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    authz::adapter::incoming::web::admin_gate::require_admin,
    shared::api::{store_error, ApiResponse},
    tasks::application::domain::entities::TaskDraft,
    AppState,
};

#[get("/api/tasks")]
pub async fn list_tasks_handler(data: web::Data<AppState>) -> impl Responder {
    match data.tasks.list().await {
        Ok(tasks) => ApiResponse::success(tasks),
        Err(_) => ApiResponse::internal_error(),
    }
}

#[put("/api/tasks")]
pub async fn upsert_task_handler(
    user: AuthenticatedUser,
    body: web::Json<TaskDraft>,
    data: web::Data<AppState>,
) -> impl Responder {
    if let Err(resp) = require_admin(&user, &data).await {
        return resp;
    }

    match data.tasks.upsert(body.into_inner()).await {
        Ok(task) => ApiResponse::success(task),
        Err(err) => store_error(&err),
    }
}

#[delete("/api/tasks/{id}")]
pub async fn delete_task_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    if let Err(resp) = require_admin(&user, &data).await {
        return resp;
    }

    match data.tasks.remove(path.into_inner()).await {
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
    use crate::tasks::application::domain::entities::{Task, TaskStatus};
    use crate::tests::support::{
        app_state_builder::TestAppStateBuilder,
        stubs::{bearer, read_json, StubCheckAdminUseCase, StubSectionUseCase, StubTokenProvider},
    };

    fn task(title: &str, status: TaskStatus) -> Task {
        Task {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: None,
            url: None,
            github_repo: None,
            status,
        }
    }

    #[actix_web::test]
    async fn public_list_serializes_status() {
        let state = TestAppStateBuilder::default()
            .with_tasks(StubSectionUseCase::listing(vec![task(
                "ship the blog",
                TaskStatus::InProgress,
            )]))
            .build();

        let app = test::init_service(App::new().app_data(state).service(list_tasks_handler)).await;

        let req = test::TestRequest::get().uri("/api/tasks").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);

        let json = read_json(resp).await;
        assert_eq!(json["data"][0]["status"], "in-progress");
    }

    #[actix_web::test]
    async fn upsert_accepts_status_string() {
        let saved = task("done thing", TaskStatus::Completed);
        let state = TestAppStateBuilder::default()
            .with_check_admin(StubCheckAdminUseCase::admin())
            .with_tasks(StubSectionUseCase::echo(saved))
            .build();
        let token_provider: Arc<dyn TokenProvider + Send + Sync> =
            Arc::new(StubTokenProvider::new(Uuid::new_v4()));

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(token_provider))
                .service(upsert_task_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/tasks")
            .insert_header(bearer())
            .set_json(json!({ "title": "done thing", "status": "completed" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);

        let json = read_json(resp).await;
        assert_eq!(json["data"]["status"], "completed");
    }
}
