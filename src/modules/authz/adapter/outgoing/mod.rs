pub mod sea_orm_entity;

mod role_store_postgres;

pub use role_store_postgres::RoleStorePostgres;
