use std::collections::BTreeSet;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use flight_planning_backend::{
    config::{Config, DEFAULT_MAX_SEAT_NUMBER},
    db::flights::{self, Flight, NewFlight},
    routes::create_router,
    AppState,
};
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use serde_json::Value;
use tower::ServiceExt;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub db: DatabaseConnection,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_max_seat_number(DEFAULT_MAX_SEAT_NUMBER).await
    }

    pub async fn with_max_seat_number(max_seat_number: i32) -> Self {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to open in-memory database");
        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        let config = Config {
            database_url: "sqlite::memory:".to_string(),
            server_host: "127.0.0.1".to_string(),
            server_port: 0,
            cors_origin: "http://localhost:5173".parse().unwrap(),
            max_seat_number,
            seed_flights: false,
        };

        let state = AppState {
            db: db.clone(),
            config,
        };

        Self {
            router: create_router(state),
            db,
        }
    }

    pub async fn add_flight(
        &self,
        departure: &str,
        destination: &str,
        date: &str,
        price: f64,
        seats: &[i32],
    ) -> Flight {
        flights::insert(
            &self.db,
            NewFlight {
                departure: departure.to_string(),
                destination: destination.to_string(),
                flight_date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
                flight_duration: "2h 15m".to_string(),
                price,
                stopover: None,
                price_business: price * 3.0,
                booked_seats: seats.iter().copied().collect::<BTreeSet<i32>>(),
            },
        )
        .await
        .expect("Failed to insert flight")
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Vec<u8>) {
        let req = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();

        let response = self.router.clone().oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (status, bytes.to_vec())
    }

    pub async fn get_json(&self, uri: &str) -> (StatusCode, Value) {
        let (status, bytes) = self.get(uri).await;
        (status, serde_json::from_slice(&bytes).unwrap())
    }
}

pub fn seat_set(body: &Value) -> BTreeSet<i64> {
    body["bookedSeats"]
        .as_array()
        .expect("bookedSeats must be an array")
        .iter()
        .map(|v| v.as_i64().unwrap())
        .collect()
}
