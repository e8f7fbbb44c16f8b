use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Singleton: the application keeps this at 0 or 1 rows.
        manager
            .create_table(
                Table::create()
                    .table(SiteConfig::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SiteConfig::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(SiteConfig::SiteName).text())
                    .col(ColumnDef::new(SiteConfig::Description).text())
                    .col(ColumnDef::new(SiteConfig::HeroName).text())
                    .col(ColumnDef::new(SiteConfig::HeroHeadline).text())
                    .col(ColumnDef::new(SiteConfig::HeroPhotoUrl).text())
                    .col(ColumnDef::new(SiteConfig::FaviconUrl).text())
                    .col(ColumnDef::new(SiteConfig::CvUrl).text())
                    .col(ColumnDef::new(SiteConfig::AboutText).text())
                    .col(ColumnDef::new(SiteConfig::GithubUsername).text())
                    .col(
                        ColumnDef::new(SiteConfig::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SiteConfig::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SiteConfig {
    Table,
    Id,
    SiteName,
    Description,
    HeroName,
    HeroHeadline,
    HeroPhotoUrl,
    FaviconUrl,
    CvUrl,
    AboutText,
    GithubUsername,
    UpdatedAt,
}
