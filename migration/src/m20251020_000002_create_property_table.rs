use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Property::Table)
                    .if_not_exists()
                    .col(pk_auto(Property::Id))
                    .col(string(Property::Name))
                    .col(string_null(Property::Location))
                    .col(double_null(Property::Price))
                    .col(text_null(Property::Description))
                    .col(text_null(Property::ImageUrl))
                    .col(
                        timestamp(Property::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Property::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Property {
    Table,
    Id,
    Name,
    Location,
    Price,
    Description,
    ImageUrl,
    CreatedAt,
}
