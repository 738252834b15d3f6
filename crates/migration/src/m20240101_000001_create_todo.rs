//! Create `todo` table.
//! Soft delete is a nullable `deleted_at`; active rows keep it NULL.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Todo::Table)
                    .if_not_exists()
                    .col(uuid(Todo::Id).primary_key())
                    .col(string_len(Todo::Task, 512).not_null())
                    .col(small_integer(Todo::IsDone).not_null())
                    .col(timestamp_with_time_zone(Todo::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Todo::UpdatedAt).not_null())
                    .col(timestamp_with_time_zone_null(Todo::DeletedAt))
                    .to_owned(),
            )
            .await?;

        // Active-row scans filter on deleted_at IS NULL
        manager
            .create_index(
                Index::create()
                    .name("idx_todo_deleted_at")
                    .table(Todo::Table)
                    .col(Todo::DeletedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Todo::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Todo {
    Table,
    Id,
    Task,
    IsDone,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
