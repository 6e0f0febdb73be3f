use sea_orm_migration::prelude::*;

use crate::m20240101_000001_create_articles::Articles;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ScheduledPosts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ScheduledPosts::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ScheduledPosts::UserId).uuid().not_null())
                    // NULL for posts written in the planner itself
                    .col(ColumnDef::new(ScheduledPosts::ArticleId).uuid())
                    .col(
                        ColumnDef::new(ScheduledPosts::Platform)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(ColumnDef::new(ScheduledPosts::Content).text().not_null())
                    .col(
                        ColumnDef::new(ScheduledPosts::ScheduledAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ScheduledPosts::Status)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(ColumnDef::new(ScheduledPosts::ImageUrl).text())
                    .col(ColumnDef::new(ScheduledPosts::MediaType).string_len(8))
                    .col(ColumnDef::new(ScheduledPosts::ErrorMessage).text())
                    .col(
                        ColumnDef::new(ScheduledPosts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ScheduledPosts::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_scheduled_posts_article")
                            .from(ScheduledPosts::Table, ScheduledPosts::ArticleId)
                            .to(Articles::Table, Articles::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_scheduled_posts_user_id")
                    .table(ScheduledPosts::Table)
                    .col(ScheduledPosts::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_scheduled_posts_scheduled_at")
                    .table(ScheduledPosts::Table)
                    .col(ScheduledPosts::ScheduledAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ScheduledPosts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ScheduledPosts {
    Table,
    Id,
    UserId,
    ArticleId,
    Platform,
    Content,
    ScheduledAt,
    Status,
    ImageUrl,
    MediaType,
    ErrorMessage,
    CreatedAt,
    UpdatedAt,
}
