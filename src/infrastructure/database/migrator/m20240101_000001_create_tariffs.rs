//! Create tariffs table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tariffs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tariffs::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Tariffs::Name).string().not_null())
                    .col(
                        ColumnDef::new(Tariffs::BasePriceCents)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Tariffs::DiscountBp)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Tariffs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Unique index on name - the authoritative uniqueness backstop
        manager
            .create_index(
                Index::create()
                    .name("idx_tariffs_name")
                    .table(Tariffs::Table)
                    .col(Tariffs::Name)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tariffs::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Tariffs {
    Table,
    Id,
    Name,
    BasePriceCents,
    DiscountBp,
    CreatedAt,
}
