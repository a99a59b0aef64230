//! Migration: Create faqs table.
//!
//! `category_id` is indexed but has no foreign key: deleting a category
//! leaves its FAQs in place.

use sea_orm_migration::prelude::*;

use super::m20250101_000002_create_stores_table::Stores;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Faqs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Faqs::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Faqs::CategoryId).integer().not_null())
                    .col(ColumnDef::new(Faqs::StoreId).integer().null())
                    .col(
                        ColumnDef::new(Faqs::IsGlobal)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_faqs_store_id")
                            .from(Faqs::Table, Faqs::StoreId)
                            .to(Stores::Table, Stores::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_faqs_category_id")
                    .table(Faqs::Table)
                    .col(Faqs::CategoryId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_faqs_store_id")
                    .table(Faqs::Table)
                    .col(Faqs::StoreId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Faqs::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Faqs {
    Table,
    Id,
    CategoryId,
    StoreId,
    IsGlobal,
}
