use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20251020_000001_create_user_table::User, m20251020_000002_create_property_table::Property,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(pk_auto(Booking::Id))
                    .col(integer(Booking::PropertyId))
                    .col(integer(Booking::UserId))
                    .col(date(Booking::CheckIn))
                    .col(date(Booking::CheckOut))
                    .col(string_len(Booking::Status, 16).default("active"))
                    .col(
                        timestamp(Booking::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .check(Expr::col(Booking::CheckOut).gte(Expr::col(Booking::CheckIn)))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_property_id")
                            .from(Booking::Table, Booking::PropertyId)
                            .to(Property::Table, Property::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_user_id")
                            .from(Booking::Table, Booking::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Booking {
    Table,
    Id,
    PropertyId,
    UserId,
    CheckIn,
    CheckOut,
    Status,
    CreatedAt,
}
