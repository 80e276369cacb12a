//! Flight store: flights together with their owned set of booked seats.
//!
//! Seat numbers live in `flight_booked_seats`, one row per seat, but callers
//! only ever see them as the `booked_seats` value of a [`Flight`].

use std::collections::BTreeSet;

use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction,
    EntityTrait, LoaderTrait, ModelTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};

use crate::entities::{flight, flight_booked_seat};
use crate::error::AppResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub id: i64,
    pub departure: String,
    pub destination: String,
    pub flight_date: NaiveDate,
    pub flight_duration: String,
    pub price: f64,
    pub stopover: Option<String>,
    pub price_business: f64,
    pub booked_seats: BTreeSet<i32>,
}

/// A flight that has not been stored yet; the store assigns its id.
#[derive(Debug, Clone)]
pub struct NewFlight {
    pub departure: String,
    pub destination: String,
    pub flight_date: NaiveDate,
    pub flight_duration: String,
    pub price: f64,
    pub stopover: Option<String>,
    pub price_business: f64,
    pub booked_seats: BTreeSet<i32>,
}

impl Flight {
    fn from_parts(model: flight::Model, seats: Vec<flight_booked_seat::Model>) -> Self {
        Self {
            id: model.id,
            departure: model.departure,
            destination: model.destination,
            flight_date: model.flight_date,
            flight_duration: model.flight_duration,
            price: model.price,
            stopover: model.stopover,
            price_business: model.price_business,
            booked_seats: seats.into_iter().map(|s| s.seat_number).collect(),
        }
    }

    fn active_model(&self) -> flight::ActiveModel {
        flight::ActiveModel {
            id: Set(self.id),
            departure: Set(self.departure.clone()),
            destination: Set(self.destination.clone()),
            flight_date: Set(self.flight_date),
            flight_duration: Set(self.flight_duration.clone()),
            price: Set(self.price),
            stopover: Set(self.stopover.clone()),
            price_business: Set(self.price_business),
        }
    }
}

/// All stored flights in ascending id order.
pub async fn find_all(db: &DatabaseConnection) -> AppResult<Vec<Flight>> {
    let flights = flight::Entity::find()
        .order_by_asc(flight::Column::Id)
        .all(db)
        .await?;
    let seats = flights.load_many(flight_booked_seat::Entity, db).await?;

    Ok(flights
        .into_iter()
        .zip(seats)
        .map(|(f, s)| Flight::from_parts(f, s))
        .collect())
}

pub async fn find_by_id(db: &DatabaseConnection, id: i64) -> AppResult<Option<Flight>> {
    let Some(model) = flight::Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };

    let seats = model
        .find_related(flight_booked_seat::Entity)
        .all(db)
        .await?;

    Ok(Some(Flight::from_parts(model, seats)))
}

/// Upsert a flight and replace its booked seats with `flight.booked_seats`.
pub async fn save(db: &DatabaseConnection, flight: Flight) -> AppResult<Flight> {
    let txn = db.begin().await?;

    let exists = flight::Entity::find_by_id(flight.id)
        .one(&txn)
        .await?
        .is_some();

    if exists {
        flight.active_model().update(&txn).await?;
    } else {
        flight.active_model().insert(&txn).await?;
    }

    flight_booked_seat::Entity::delete_many()
        .filter(flight_booked_seat::Column::FlightId.eq(flight.id))
        .exec(&txn)
        .await?;
    insert_seats(&txn, flight.id, &flight.booked_seats).await?;

    txn.commit().await?;

    Ok(flight)
}

/// Store a new flight; returns it with the assigned id.
/// Inside an open transaction the insert runs as a nested savepoint.
pub async fn insert<C>(db: &C, new_flight: NewFlight) -> AppResult<Flight>
where
    C: ConnectionTrait + TransactionTrait,
{
    let txn = db.begin().await?;

    let model = flight::ActiveModel {
        departure: Set(new_flight.departure),
        destination: Set(new_flight.destination),
        flight_date: Set(new_flight.flight_date),
        flight_duration: Set(new_flight.flight_duration),
        price: Set(new_flight.price),
        stopover: Set(new_flight.stopover),
        price_business: Set(new_flight.price_business),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    insert_seats(&txn, model.id, &new_flight.booked_seats).await?;

    txn.commit().await?;

    let seats = new_flight
        .booked_seats
        .iter()
        .map(|&seat_number| flight_booked_seat::Model {
            flight_id: model.id,
            seat_number,
        })
        .collect();

    Ok(Flight::from_parts(model, seats))
}

async fn insert_seats(
    txn: &DatabaseTransaction,
    flight_id: i64,
    seats: &BTreeSet<i32>,
) -> AppResult<()> {
    // insert_many rejects an empty batch
    if seats.is_empty() {
        return Ok(());
    }

    let rows = seats.iter().map(|&seat_number| flight_booked_seat::ActiveModel {
        flight_id: Set(flight_id),
        seat_number: Set(seat_number),
    });

    flight_booked_seat::Entity::insert_many(rows)
        .exec_without_returning(txn)
        .await?;

    Ok(())
}
