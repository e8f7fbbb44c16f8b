use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::blog::application::{
    domain::entities::{BlogPost, BlogPostDraft},
    ports::outgoing::BlogPostRepository,
};
use crate::shared::store::StoreError;

use super::sea_orm_entity::{
    ActiveModel as PostActiveModel, Column as PostColumn, Entity as PostEntity,
    Model as PostModel,
};

#[derive(Debug, Clone)]
pub struct BlogPostRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl BlogPostRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn apply_draft(active: &mut PostActiveModel, draft: BlogPostDraft) {
    if let Some(v) = draft.title {
        active.title = Set(v);
    }
    if let Some(v) = draft.slug {
        active.slug = Set(v);
    }
    if let Some(v) = draft.content {
        active.content = Set(v);
    }
    if let Some(v) = draft.published {
        active.published = Set(v);
    }
}

#[async_trait]
impl BlogPostRepository for BlogPostRepositoryPostgres {
    async fn list(&self, published_only: bool) -> Result<Vec<BlogPost>, StoreError> {
        let mut query = PostEntity::find().order_by_desc(PostColumn::CreatedAt);
        if published_only {
            query = query.filter(PostColumn::Published.eq(true));
        }

        let models = query.all(&*self.db).await.map_err(StoreError::from_db_err)?;

        Ok(models.into_iter().map(PostModel::into_domain).collect())
    }

    async fn insert(&self, draft: BlogPostDraft) -> Result<BlogPost, StoreError> {
        let mut active = PostActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(String::new()),
            slug: Set(String::new()),
            content: Set(String::new()),
            published: Set(false),
            ..Default::default()
        };
        apply_draft(&mut active, draft);

        let inserted = active
            .insert(&*self.db)
            .await
            .map_err(StoreError::from_db_err)?;

        Ok(inserted.into_domain())
    }

    async fn update(&self, id: Uuid, draft: BlogPostDraft) -> Result<BlogPost, StoreError> {
        let mut active = PostActiveModel {
            id: Set(id),
            ..Default::default()
        };
        apply_draft(&mut active, draft);

        let updated = active
            .update(&*self.db)
            .await
            .map_err(StoreError::from_db_err)?;

        Ok(updated.into_domain())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), StoreError> {
        PostEntity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(StoreError::from_db_err)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, Transaction};

    fn post_model(title: &str, published: bool) -> PostModel {
        let now = Utc::now().fixed_offset();
        PostModel {
            id: Uuid::new_v4(),
            title: title.to_string(),
            slug: title.replace(' ', "-"),
            content: "body".to_string(),
            published,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn published_only_listing_maps_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![post_model("live post", true)]])
            .into_connection();

        let repo = BlogPostRepositoryPostgres::new(Arc::new(db));

        let posts = repo.list(true).await.unwrap();
        assert_eq!(posts.len(), 1);
        assert!(posts[0].published);
        assert_eq!(posts[0].slug, "live-post");
    }

    #[tokio::test]
    async fn published_only_listing_filters_and_orders_in_sql() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![Vec::<PostModel>::new()])
                .into_connection(),
        );
        let repo = BlogPostRepositoryPostgres::new(db.clone());

        repo.list(true).await.unwrap();
        drop(repo);

        let Ok(db) = Arc::try_unwrap(db) else {
            panic!("repository still holds the connection");
        };
        assert_eq!(
            db.into_transaction_log(),
            [Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                r#"SELECT "blog_posts"."id", "blog_posts"."title", "blog_posts"."slug", "blog_posts"."content", "blog_posts"."published", "blog_posts"."created_at", "blog_posts"."updated_at" FROM "blog_posts" WHERE "blog_posts"."published" = $1 ORDER BY "blog_posts"."created_at" DESC"#,
                [true.into()],
            )]
        );
    }

    #[tokio::test]
    async fn unfiltered_listing_returns_drafts_too() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                post_model("live", true),
                post_model("draft", false),
            ]])
            .into_connection();

        let repo = BlogPostRepositoryPostgres::new(Arc::new(db));

        let posts = repo.list(false).await.unwrap();
        assert_eq!(posts.len(), 2);
        assert!(!posts[1].published);
    }
}
