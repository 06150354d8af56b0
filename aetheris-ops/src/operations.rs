use aetheris_core::repository::FlightRepository;
use aetheris_core::{CoreError, CoreResult, Flight, FlightStatus, SeatReservation};
use aetheris_store::FlightStore;
use chrono::{NaiveDate, NaiveTime};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::seed::demo_flights;

/// Outcome of a bulk preload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreloadReport {
    pub inserted: usize,
    pub skipped: usize,
}

/// Single entry point for flight lifecycle operations.
///
/// Holds no state of its own; every call is forwarded to the repository
/// with the repository's contract unchanged.
#[derive(Clone)]
pub struct FlightOperations {
    repo: Arc<dyn FlightRepository>,
}

impl FlightOperations {
    pub fn new(repo: Arc<dyn FlightRepository>) -> Self {
        Self { repo }
    }

    /// Operations over a fresh, empty in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(FlightStore::new()))
    }

    /// Operations over `repo` preloaded with the demonstration flights.
    pub fn seeded(repo: Arc<dyn FlightRepository>, today: NaiveDate) -> Self {
        let ops = Self::new(repo);
        let report = ops.preload(demo_flights(today));
        info!(inserted = report.inserted, skipped = report.skipped, "Seeded flight inventory");
        ops
    }

    /// Save every record, skipping ids that are already stored.
    pub fn preload<I>(&self, flights: I) -> PreloadReport
    where
        I: IntoIterator<Item = Flight>,
    {
        let mut report = PreloadReport::default();
        for flight in flights {
            match self.repo.save(flight) {
                Ok(_) => report.inserted += 1,
                Err(err) => {
                    warn!("Preload skipped record: {}", err);
                    report.skipped += 1;
                }
            }
        }
        report
    }

    // ----- CRUD -----

    pub fn create_flight(&self, flight: Flight) -> CoreResult<Flight> {
        let created = self.repo.save(flight)?;
        info!(flight_id = %created.id, code = %created.flight_code, "Flight created");
        Ok(created)
    }

    pub fn get_flight_by_id(&self, id: Uuid) -> Option<Flight> {
        self.repo.find_by_id(id)
    }

    pub fn get_flight_by_code(&self, code: &str) -> Option<Flight> {
        self.repo.find_by_code(code)
    }

    pub fn get_all_flights(&self) -> Vec<Flight> {
        self.repo.find_all()
    }

    pub fn update_flight(&self, flight: Flight) -> Option<Flight> {
        self.repo.update(flight)
    }

    pub fn delete_flight(&self, id: Uuid) -> bool {
        let deleted = self.repo.delete_by_id(id);
        if deleted {
            info!(flight_id = %id, "Flight deleted");
        }
        deleted
    }

    // ----- Queries -----

    pub fn find_flights_by_route(&self, origin: &str, destination: &str) -> Vec<Flight> {
        self.repo.find_by_route(origin, destination)
    }

    pub fn find_flights_by_status(&self, status: &str) -> Vec<Flight> {
        self.repo.find_by_status(status)
    }

    pub fn find_flights_by_date(&self, date: NaiveDate) -> Vec<Flight> {
        self.repo.find_by_date(date)
    }

    pub fn find_flights_by_date_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<Flight> {
        self.repo.find_by_date_range(start, end)
    }

    pub fn find_flights_by_plane(&self, plane_id: &str) -> Vec<Flight> {
        self.repo.find_by_plane(plane_id)
    }

    pub fn find_flights_by_pilot(&self, pilot_id: &str) -> Vec<Flight> {
        self.repo.find_by_pilot(pilot_id)
    }

    pub fn find_flights_by_route_and_date(
        &self,
        origin: &str,
        destination: &str,
        date: NaiveDate,
    ) -> Vec<Flight> {
        self.repo.find_by_route_and_date(origin, destination, date)
    }

    pub fn find_flights_by_price_range(&self, min: f64, max: f64) -> Vec<Flight> {
        self.repo.find_by_price_range(min, max)
    }

    pub fn find_upcoming_flights(&self, date: NaiveDate, time: NaiveTime, margin_hours: u32) -> Vec<Flight> {
        self.repo.find_upcoming(date, time, margin_hours)
    }

    // ----- Business operations -----

    pub fn check_availability(&self, id: Uuid, requested_seats: u32) -> bool {
        self.repo.has_availability(id, requested_seats)
    }

    /// Reserve seats and return the outcome with the record it was decided on.
    pub fn reserve(&self, id: Uuid, seats: u32) -> SeatReservation {
        let outcome = self.repo.reserve(id, seats);
        info!(flight_id = %id, seats, reserved = outcome.is_reserved(), "Seat reservation");
        outcome
    }

    pub fn reserve_seats(&self, id: Uuid, seats: u32) -> bool {
        self.reserve(id, seats).is_reserved()
    }

    pub fn update_flight_status(&self, id: Uuid, status: FlightStatus) -> bool {
        let updated = self.repo.update_status(id, status.clone());
        info!(flight_id = %id, status = %status, updated, "Flight status update");
        updated
    }

    pub fn cancel_flight(&self, id: Uuid) -> bool {
        let cancelled = self.repo.cancel_flight(id);
        info!(flight_id = %id, cancelled, "Flight cancellation");
        cancelled
    }

    pub fn reassign_plane(&self, id: Uuid, plane_id: &str) -> bool {
        let reassigned = self.repo.reassign_plane(id, plane_id);
        info!(flight_id = %id, plane_id, reassigned, "Plane reassignment");
        reassigned
    }

    // ----- Statistics -----

    pub fn count_flights_by_status(&self, status: &str) -> usize {
        self.repo.count_by_status(status)
    }

    pub fn get_cheapest_flight(&self) -> Option<Flight> {
        self.repo.find_cheapest()
    }

    pub fn get_longest_flights(&self, top: usize) -> Vec<Flight> {
        self.repo.find_longest(top)
    }

    /// Look up a flight, turning absence into `CoreError::NotFound`.
    pub fn require_flight(&self, id: Uuid) -> CoreResult<Flight> {
        self.repo.find_by_id(id).ok_or(CoreError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    fn seeded() -> FlightOperations {
        FlightOperations::seeded(Arc::new(FlightStore::new()), today())
    }

    #[test]
    fn test_seeded_inventory() {
        let ops = seeded();

        assert_eq!(ops.get_all_flights().len(), 5);
        assert_eq!(ops.count_flights_by_status("scheduled"), 3);
        assert_eq!(ops.count_flights_by_status("MAINTENANCE"), 2);
        assert_eq!(ops.get_cheapest_flight().unwrap().flight_code, "AV1234");

        let longest: Vec<String> = ops
            .get_longest_flights(2)
            .into_iter()
            .map(|f| f.flight_code)
            .collect();
        assert_eq!(longest, vec!["AV7890", "AV3456"]);
    }

    #[test]
    fn test_seeded_queries() {
        let ops = seeded();

        assert_eq!(ops.find_flights_by_route("bogotá", "cali").len(), 1);
        assert_eq!(ops.find_flights_by_plane("B787-004").len(), 1);
        assert_eq!(ops.find_flights_by_pilot("PIL-005").len(), 1);
        assert_eq!(ops.find_flights_by_price_range(300_000.0, 400_000.0).len(), 2);

        let tomorrow = today().succ_opt().unwrap();
        assert_eq!(ops.find_flights_by_date(tomorrow).len(), 1);
        let upcoming = ops.find_upcoming_flights(tomorrow, NaiveTime::from_hms_opt(8, 0, 0).unwrap(), 1);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].flight_code, "AV1234");
    }

    #[test]
    fn test_preload_skips_duplicates() {
        let ops = FlightOperations::in_memory();
        let flights = demo_flights(today());
        let again = flights[0].clone();

        let report = ops.preload(flights);
        assert_eq!(report, PreloadReport { inserted: 5, skipped: 0 });

        let report = ops.preload(vec![again]);
        assert_eq!(report, PreloadReport { inserted: 0, skipped: 1 });
        assert_eq!(ops.get_all_flights().len(), 5);
    }

    #[test]
    fn test_reservation_then_cancellation() {
        let ops = seeded();
        let flight = ops.get_flight_by_code("av1234").unwrap();

        assert!(ops.check_availability(flight.id, 150));
        assert!(ops.reserve_seats(flight.id, 149));
        assert!(!ops.reserve_seats(flight.id, 2));
        assert_eq!(ops.require_flight(flight.id).unwrap().available_seats, 1);

        assert!(ops.cancel_flight(flight.id));
        let cancelled = ops.require_flight(flight.id).unwrap();
        assert_eq!(cancelled.status, FlightStatus::Cancelled);
        assert_eq!(cancelled.available_seats, 0);
        assert!(!ops.reserve_seats(flight.id, 1));
        assert!(matches!(ops.reserve(flight.id, 1), SeatReservation::Refused(f) if f.available_seats == 0));
        assert_eq!(ops.reserve(Uuid::new_v4(), 1), SeatReservation::NotFound);
    }

    #[test]
    fn test_lifecycle_on_missing_flight() {
        let ops = seeded();
        let missing = Uuid::new_v4();

        assert!(!ops.update_flight_status(missing, FlightStatus::Landed));
        assert!(!ops.cancel_flight(missing));
        assert!(!ops.reassign_plane(missing, "A320-009"));
        assert!(!ops.delete_flight(missing));
        assert!(matches!(ops.require_flight(missing), Err(CoreError::NotFound(id)) if id == missing));
    }

    #[test]
    fn test_crud_round() {
        let ops = FlightOperations::in_memory();
        let mut flight = demo_flights(today()).remove(2);
        let created = ops.create_flight(flight.clone()).unwrap();
        assert_eq!(ops.get_flight_by_id(created.id), Some(created.clone()));

        flight.available_seats = 10;
        assert_eq!(ops.update_flight(flight.clone()), Some(flight.clone()));
        assert!(ops.reassign_plane(flight.id, "A320-010"));
        assert!(ops.update_flight_status(flight.id, FlightStatus::InFlight));

        let stored = ops.require_flight(flight.id).unwrap();
        assert_eq!(stored.plane_id, "A320-010");
        assert_eq!(stored.status, FlightStatus::InFlight);

        assert!(ops.delete_flight(flight.id));
        assert!(ops.get_flight_by_id(flight.id).is_none());
        assert!(ops.update_flight(flight).is_none());
    }
}
