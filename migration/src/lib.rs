pub use sea_orm_migration::prelude::*;

mod m20250312_000001_create_flights;
mod m20250312_000002_create_flight_booked_seats;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250312_000001_create_flights::Migration),
            Box::new(m20250312_000002_create_flight_booked_seats::Migration),
        ]
    }
}
