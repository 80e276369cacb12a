use sea_orm_migration::{prelude::*, schema::*};

use super::m20250312_000001_create_flights::Flight;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Owned collection of seat numbers, one row per booked seat
        manager
            .create_table(
                Table::create()
                    .table(FlightBookedSeats::Table)
                    .if_not_exists()
                    .col(big_integer(FlightBookedSeats::FlightId).not_null())
                    .col(integer(FlightBookedSeats::SeatNumber).not_null())
                    .primary_key(
                        Index::create()
                            .col(FlightBookedSeats::FlightId)
                            .col(FlightBookedSeats::SeatNumber),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flight_booked_seats_flight")
                            .from(FlightBookedSeats::Table, FlightBookedSeats::FlightId)
                            .to(Flight::Table, Flight::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FlightBookedSeats::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FlightBookedSeats {
    Table,
    FlightId,
    SeatNumber,
}
