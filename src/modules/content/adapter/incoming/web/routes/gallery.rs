use actix_web::{delete, get, put, web, Responder};
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    authz::adapter::incoming::web::admin_gate::require_admin,
    content::application::domain::entities::GalleryItemDraft,
    shared::api::{store_error, ApiResponse},
    AppState,
};

#[get("/api/gallery")]
pub async fn list_gallery_handler(data: web::Data<AppState>) -> impl Responder {
    match data.gallery.list().await {
        Ok(items) => ApiResponse::success(items),
        Err(_) => ApiResponse::internal_error(),
    }
}

#[put("/api/gallery")]
pub async fn upsert_gallery_item_handler(
    user: AuthenticatedUser,
    body: web::Json<GalleryItemDraft>,
    data: web::Data<AppState>,
) -> impl Responder {
    if let Err(resp) = require_admin(&user, &data).await {
        return resp;
    }

    match data.gallery.upsert(body.into_inner()).await {
        Ok(item) => ApiResponse::success(item),
        Err(err) => store_error(&err),
    }
}

#[delete("/api/gallery/{id}")]
pub async fn delete_gallery_item_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    if let Err(resp) = require_admin(&user, &data).await {
        return resp;
    }

    match data.gallery.remove(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(_) => ApiResponse::internal_error(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use std::sync::Arc;

    use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
    use crate::content::application::domain::entities::GalleryItem;
    use crate::tests::support::{
        app_state_builder::TestAppStateBuilder,
        stubs::{read_json, StubCheckAdminUseCase, StubSectionUseCase, StubTokenProvider},
    };

    #[actix_web::test]
    async fn public_list_returns_items() {
        let state = TestAppStateBuilder::default()
            .with_gallery(StubSectionUseCase::listing(vec![GalleryItem {
                id: Uuid::new_v4(),
                image_url: "https://example.com/a.jpg".to_string(),
                caption: None,
                sort_order: 0,
            }]))
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(list_gallery_handler)).await;

        let req = test::TestRequest::get().uri("/api/gallery").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);

        let json = read_json(resp).await;
        assert_eq!(json["data"][0]["image_url"], "https://example.com/a.jpg");
    }

    #[actix_web::test]
    async fn delete_without_token_is_unauthorized() {
        let state = TestAppStateBuilder::default()
            .with_check_admin(StubCheckAdminUseCase::admin())
            .with_gallery(StubSectionUseCase::never_called())
            .build();
        let token_provider: Arc<dyn TokenProvider + Send + Sync> =
            Arc::new(StubTokenProvider::new(Uuid::new_v4()));

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(token_provider))
                .service(delete_gallery_item_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/gallery/{}", Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
