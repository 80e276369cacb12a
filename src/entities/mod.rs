pub mod flight;
pub mod flight_booked_seat;
