pub mod sea_orm_entity;

mod task_repository_postgres;

pub use task_repository_postgres::TaskRepositoryPostgres;
