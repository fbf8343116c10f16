use sea_orm_migration::{prelude::*, schema::*};

use super::m20251020_000002_create_property_table::Property;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Feedback::Table)
                    .if_not_exists()
                    .col(pk_auto(Feedback::Id))
                    .col(integer(Feedback::PropertyId))
                    .col(text(Feedback::Comment))
                    .col(integer(Feedback::Rating))
                    .col(
                        timestamp(Feedback::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .check(Expr::col(Feedback::Rating).between(1, 5))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_feedback_property_id")
                            .from(Feedback::Table, Feedback::PropertyId)
                            .to(Property::Table, Property::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Feedback::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Feedback {
    Table,
    Id,
    PropertyId,
    Comment,
    Rating,
    CreatedAt,
}
