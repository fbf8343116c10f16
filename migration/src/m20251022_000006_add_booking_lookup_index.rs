use sea_orm_migration::prelude::*;

use super::m20251020_000003_create_booking_table::Booking;

/// Overlap checks and sweeps filter on property, status and the date columns.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("idx_booking_property_status_dates")
                    .table(Booking::Table)
                    .col(Booking::PropertyId)
                    .col(Booking::Status)
                    .col(Booking::CheckIn)
                    .col(Booking::CheckOut)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_booking_property_status_dates")
                    .table(Booking::Table)
                    .to_owned(),
            )
            .await
    }
}
