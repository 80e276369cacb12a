use std::collections::BTreeSet;

use rand::Rng;

/// Generate a random set of booked seats numbered `1..=max_seat_number`.
/// The set size is drawn uniformly from `1..=max_seat_number`, then seat
/// numbers are drawn until that many distinct ones have been collected.
pub fn generate_booked_seats<R: Rng + ?Sized>(rng: &mut R, max_seat_number: i32) -> BTreeSet<i32> {
    let max_seat_number = max_seat_number.max(1);
    let target = rng.gen_range(1..=max_seat_number) as usize;

    let mut seats = BTreeSet::new();
    while seats.len() < target {
        seats.insert(rng.gen_range(1..=max_seat_number));
    }
    seats
}
