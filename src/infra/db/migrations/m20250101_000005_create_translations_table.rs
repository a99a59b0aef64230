//! Migration: Create translations table.
//!
//! The (faq_id, language) index is not unique; one row per language is
//! maintained by reconciliation on update.

use sea_orm_migration::prelude::*;

use super::m20250101_000004_create_faqs_table::Faqs;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Translations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Translations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Translations::FaqId).integer().not_null())
                    .col(ColumnDef::new(Translations::Language).string_len(10).not_null())
                    .col(ColumnDef::new(Translations::Question).text().not_null())
                    .col(ColumnDef::new(Translations::Answer).text().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_translations_faq_id")
                            .from(Translations::Table, Translations::FaqId)
                            .to(Faqs::Table, Faqs::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_translations_faq_id_language")
                    .table(Translations::Table)
                    .col(Translations::FaqId)
                    .col(Translations::Language)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Translations::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Translations {
    Table,
    Id,
    FaqId,
    Language,
    Question,
    Answer,
}
