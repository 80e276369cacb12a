use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Flight::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Flight::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(string_len(Flight::Departure, 100).not_null())
                    .col(string_len(Flight::Destination, 100).not_null())
                    .col(date(Flight::FlightDate).not_null())
                    .col(string_len(Flight::FlightDuration, 50).not_null())
                    .col(double(Flight::Price).not_null())
                    .col(string_len_null(Flight::Stopover, 100))
                    .col(double(Flight::PriceBusiness).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Flight::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Flight {
    Table,
    Id,
    Departure,
    Destination,
    FlightDate,
    FlightDuration,
    Price,
    Stopover,
    PriceBusiness,
}
