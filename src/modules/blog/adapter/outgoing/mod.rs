pub mod sea_orm_entity;

mod blog_post_repository_postgres;

pub use blog_post_repository_postgres::BlogPostRepositoryPostgres;
