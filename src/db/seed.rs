use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, TransactionTrait};

use crate::db::flights::{self, NewFlight};
use crate::entities::flight;
use crate::error::{AppError, AppResult};

/// (departure, destination, date, duration, price, stopover, business price)
type SampleFlight = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    f64,
    Option<&'static str>,
    f64,
);

const SAMPLE_FLIGHTS: &[SampleFlight] = &[
    ("Tallinn", "London", "2025-04-02", "3h 05m", 129.0, None, 389.0),
    ("Tallinn", "New York", "2025-04-03", "11h 40m", 549.0, Some("Helsinki"), 1890.0),
    ("Helsinki", "Tokyo", "2025-04-05", "13h 15m", 712.5, None, 2450.0),
    ("Riga", "Barcelona", "2025-04-07", "4h 10m", 98.0, None, 310.0),
    ("Tokyo", "Sydney", "2025-05-20", "9h 35m", 150.0, None, 520.0),
    ("London", "Paris", "2025-04-15", "1h 20m", 120.0, None, 280.0),
    ("Vilnius", "Dubai", "2025-04-21", "8h 55m", 403.0, Some("Istanbul"), 1320.0),
    ("Stockholm", "Reykjavik", "2025-05-02", "3h 00m", 176.0, None, 460.0),
];

/// Seed sample flights into an empty store. Returns how many were inserted.
pub async fn seed_flights(db: &DatabaseConnection) -> AppResult<usize> {
    seed_samples(db, SAMPLE_FLIGHTS).await
}

/// All samples go in or none do, so a failed seed is retried on next start.
async fn seed_samples(db: &DatabaseConnection, samples: &[SampleFlight]) -> AppResult<usize> {
    let txn = db.begin().await?;

    let existing = flight::Entity::find().count(&txn).await?;
    if existing > 0 {
        tracing::debug!("Flight table already has {} rows, skipping seed", existing);
        return Ok(0);
    }

    for &(departure, destination, date, duration, price, stopover, price_business) in samples {
        let flight_date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|e| AppError::Internal(format!("Invalid seed date {}: {}", date, e)))?;

        flights::insert(
            &txn,
            NewFlight {
                departure: departure.to_string(),
                destination: destination.to_string(),
                flight_date,
                flight_duration: duration.to_string(),
                price,
                stopover: stopover.map(str::to_string),
                price_business,
                booked_seats: Default::default(),
            },
        )
        .await?;
    }

    txn.commit().await?;

    tracing::info!("Seeded {} flights", samples.len());
    Ok(samples.len())
}
