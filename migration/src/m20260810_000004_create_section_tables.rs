use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // projects
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Projects::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Projects::Title).string_len(150).not_null())
                    .col(ColumnDef::new(Projects::Description).text().not_null())
                    .col(ColumnDef::new(Projects::TechStack).json_binary().not_null())
                    .col(ColumnDef::new(Projects::LiveDemoUrl).text())
                    .col(ColumnDef::new(Projects::GithubUrl).text())
                    .col(ColumnDef::new(Projects::ScreenshotUrl).text())
                    .col(
                        ColumnDef::new(Projects::Featured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Projects::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Projects::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Projects::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // skills
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Skills::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Skills::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Skills::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Skills::Category).string_len(100).not_null())
                    .col(ColumnDef::new(Skills::Icon).text())
                    .col(
                        ColumnDef::new(Skills::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // gallery
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Gallery::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Gallery::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Gallery::ImageUrl).text().not_null())
                    .col(ColumnDef::new(Gallery::Caption).text())
                    .col(
                        ColumnDef::new(Gallery::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // education
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Education::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Education::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(Education::Institution)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Education::Degree).string_len(200).not_null())
                    .col(ColumnDef::new(Education::Year).string_len(50).not_null())
                    .col(
                        ColumnDef::new(Education::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // experience
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Experience::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Experience::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(Experience::Company)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Experience::Role).string_len(200).not_null())
                    .col(
                        ColumnDef::new(Experience::Duration)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Experience::Description).text().not_null())
                    .col(
                        ColumnDef::new(Experience::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // social_links
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(SocialLinks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SocialLinks::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(SocialLinks::Platform)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(SocialLinks::Url).text().not_null())
                    .col(ColumnDef::new(SocialLinks::Icon).string_len(100))
                    .col(
                        ColumnDef::new(SocialLinks::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await?;

        // Ordered list reads all go through sort_order
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_projects_sort_order ON projects (sort_order);
                CREATE INDEX IF NOT EXISTS idx_skills_sort_order ON skills (sort_order);
                CREATE INDEX IF NOT EXISTS idx_gallery_sort_order ON gallery (sort_order);
                CREATE INDEX IF NOT EXISTS idx_education_sort_order ON education (sort_order);
                CREATE INDEX IF NOT EXISTS idx_experience_sort_order ON experience (sort_order);
                CREATE INDEX IF NOT EXISTS idx_social_links_sort_order ON social_links (sort_order);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SocialLinks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Experience::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Education::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Gallery::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Skills::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
    Title,
    Description,
    TechStack,
    LiveDemoUrl,
    GithubUrl,
    ScreenshotUrl,
    Featured,
    SortOrder,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Skills {
    Table,
    Id,
    Name,
    Category,
    Icon,
    SortOrder,
}

#[derive(DeriveIden)]
enum Gallery {
    Table,
    Id,
    ImageUrl,
    Caption,
    SortOrder,
}

#[derive(DeriveIden)]
enum Education {
    Table,
    Id,
    Institution,
    Degree,
    Year,
    SortOrder,
}

#[derive(DeriveIden)]
enum Experience {
    Table,
    Id,
    Company,
    Role,
    Duration,
    Description,
    SortOrder,
}

#[derive(DeriveIden)]
enum SocialLinks {
    Table,
    Id,
    Platform,
    Url,
    Icon,
    SortOrder,
}
