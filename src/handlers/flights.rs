use axum::{
    extract::{Path, State},
    Json,
};

use crate::db::flights::{self, Flight};
use crate::error::{AppError, AppResult};
use crate::utils::seats::generate_booked_seats;
use crate::AppState;

/// List all flights
pub async fn list_flights(State(state): State<AppState>) -> AppResult<Json<Vec<Flight>>> {
    let flights = flights::find_all(&state.db).await?;
    Ok(Json(flights))
}

/// Get flight details.
///
/// Not idempotent on first access: a flight without booked seats gets a
/// random set generated and stored before it is returned. The read, generate
/// and save steps are not locked, so concurrent first reads of the same
/// flight may each generate a set and the last save wins.
pub async fn get_flight(
    State(state): State<AppState>,
    Path(flight_id): Path<i64>,
) -> AppResult<Json<Flight>> {
    let mut flight = flights::find_by_id(&state.db, flight_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Flight {} not found", flight_id)))?;

    if flight.booked_seats.is_empty() {
        flight.booked_seats =
            generate_booked_seats(&mut rand::thread_rng(), state.config.max_seat_number);
        tracing::debug!(
            flight_id = flight.id,
            booked = flight.booked_seats.len(),
            "Generated booked seats"
        );
        flight = flights::save(&state.db, flight).await?;
    }

    Ok(Json(flight))
}
