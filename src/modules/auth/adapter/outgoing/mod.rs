pub mod jwt;
pub mod sea_orm_entity;
pub mod security;

mod user_repository_postgres;

pub use user_repository_postgres::UserRepositoryPostgres;
