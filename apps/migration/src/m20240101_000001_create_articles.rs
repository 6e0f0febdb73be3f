use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Articles::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Articles::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Articles::UserId).uuid().not_null())
                    .col(ColumnDef::new(Articles::Title).string().not_null())
                    .col(ColumnDef::new(Articles::OriginalLink).string())
                    .col(
                        ColumnDef::new(Articles::AutoPostStatus)
                            .string_len(16)
                            .not_null()
                            .default("NONE"),
                    )
                    .col(ColumnDef::new(Articles::AutoPostedAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(Articles::AutoPostPlatform).string_len(16))
                    .col(
                        ColumnDef::new(Articles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Articles::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_articles_user_id")
                    .table(Articles::Table)
                    .col(Articles::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Articles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Articles {
    Table,
    Id,
    UserId,
    Title,
    OriginalLink,
    AutoPostStatus,
    AutoPostedAt,
    AutoPostPlatform,
    CreatedAt,
    UpdatedAt,
}
