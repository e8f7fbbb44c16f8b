pub use sea_orm_migration::prelude::*;

mod m20260810_000001_create_users_table;
mod m20260810_000002_create_user_roles_table;
mod m20260810_000003_create_site_config_table;
mod m20260810_000004_create_section_tables;
mod m20260810_000005_create_tasks_table;
mod m20260810_000006_create_blog_posts_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260810_000001_create_users_table::Migration),
            Box::new(m20260810_000002_create_user_roles_table::Migration),
            Box::new(m20260810_000003_create_site_config_table::Migration),
            Box::new(m20260810_000004_create_section_tables::Migration),
            Box::new(m20260810_000005_create_tasks_table::Migration),
            Box::new(m20260810_000006_create_blog_posts_table::Migration),
        ]
    }
}
