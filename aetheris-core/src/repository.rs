use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

use crate::{CoreResult, Flight, FlightStatus};

/// Outcome of a seat reservation, with the record as it stood when the
/// reservation was decided.
#[derive(Debug, Clone, PartialEq)]
pub enum SeatReservation {
    Reserved(Flight),
    Refused(Flight),
    NotFound,
}

impl SeatReservation {
    pub fn is_reserved(&self) -> bool {
        matches!(self, SeatReservation::Reserved(_))
    }
}

/// Repository trait for flight inventory access.
///
/// Absence is never an error: lookups return `None`, mutations report
/// whether a record was touched. Every filter returns records in store
/// order.
pub trait FlightRepository: Send + Sync {
    // CRUD

    fn save(&self, flight: Flight) -> CoreResult<Flight>;

    fn find_by_id(&self, id: Uuid) -> Option<Flight>;

    fn find_by_code(&self, code: &str) -> Option<Flight>;

    /// Snapshot of every stored flight.
    fn find_all(&self) -> Vec<Flight>;

    /// Replaces the record with the same id. Never inserts on a miss.
    fn update(&self, flight: Flight) -> Option<Flight>;

    fn delete_by_id(&self, id: Uuid) -> bool;

    // Queries

    fn find_by_route(&self, origin: &str, destination: &str) -> Vec<Flight>;

    fn find_by_status(&self, status: &str) -> Vec<Flight>;

    fn find_by_date(&self, date: NaiveDate) -> Vec<Flight>;

    /// Inclusive on both ends.
    fn find_by_date_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<Flight>;

    fn find_by_plane(&self, plane_id: &str) -> Vec<Flight>;

    fn find_by_pilot(&self, pilot_id: &str) -> Vec<Flight>;

    fn find_by_route_and_date(&self, origin: &str, destination: &str, date: NaiveDate) -> Vec<Flight>;

    /// Inclusive on both ends.
    fn find_by_price_range(&self, min: f64, max: f64) -> Vec<Flight>;

    fn find_upcoming(&self, date: NaiveDate, time: NaiveTime, margin_hours: u32) -> Vec<Flight>;

    // Seats

    fn has_availability(&self, id: Uuid, requested_seats: u32) -> bool;

    /// Check and decrement in one step; never leaves seats negative.
    fn reserve(&self, id: Uuid, seats: u32) -> SeatReservation;

    fn reserve_seats(&self, id: Uuid, seats: u32) -> bool {
        self.reserve(id, seats).is_reserved()
    }

    // Lifecycle

    fn update_status(&self, id: Uuid, status: FlightStatus) -> bool;

    fn cancel_flight(&self, id: Uuid) -> bool;

    fn reassign_plane(&self, id: Uuid, plane_id: &str) -> bool;

    // Statistics

    fn count_by_status(&self, status: &str) -> usize;

    fn find_cheapest(&self) -> Option<Flight>;

    fn find_longest(&self, top: usize) -> Vec<Flight>;
}
