use aetheris_core::repository::FlightRepository;
use aetheris_core::search::DepartureWindow;
use aetheris_core::{CoreError, CoreResult, Flight, FlightStatus, SeatReservation};
use chrono::{NaiveDate, NaiveTime};
use parking_lot::RwLock;
use tracing::{debug, warn};
use uuid::Uuid;

/// In-memory flight inventory.
///
/// Insertion order is preserved and every query scans linearly. One lock
/// guards the whole collection; records are cloned out, never lent.
pub struct FlightStore {
    flights: RwLock<Vec<Flight>>,
}

impl FlightStore {
    pub fn new() -> Self {
        Self {
            flights: RwLock::new(Vec::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.flights.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.read().is_empty()
    }

    fn filter<P>(&self, predicate: P) -> Vec<Flight>
    where
        P: Fn(&Flight) -> bool,
    {
        self.flights
            .read()
            .iter()
            .filter(|flight| predicate(flight))
            .cloned()
            .collect()
    }

    /// Apply `mutate` to the flight with `id` under the write lock.
    fn modify<F>(&self, id: Uuid, mutate: F) -> bool
    where
        F: FnOnce(&mut Flight),
    {
        let mut flights = self.flights.write();
        match flights.iter_mut().find(|flight| flight.id == id) {
            Some(flight) => {
                mutate(flight);
                true
            }
            None => false,
        }
    }
}

impl Default for FlightStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FlightRepository for FlightStore {
    fn save(&self, flight: Flight) -> CoreResult<Flight> {
        let mut flights = self.flights.write();
        if flights.iter().any(|stored| stored.id == flight.id) {
            return Err(CoreError::DuplicateId(flight.id));
        }
        debug!(flight_id = %flight.id, code = %flight.flight_code, "Storing flight");
        flights.push(flight.clone());
        Ok(flight)
    }

    fn find_by_id(&self, id: Uuid) -> Option<Flight> {
        self.flights.read().iter().find(|flight| flight.id == id).cloned()
    }

    fn find_by_code(&self, code: &str) -> Option<Flight> {
        self.flights.read().iter().find(|flight| flight.has_code(code)).cloned()
    }

    fn find_all(&self) -> Vec<Flight> {
        self.flights.read().clone()
    }

    fn update(&self, flight: Flight) -> Option<Flight> {
        let mut flights = self.flights.write();
        let slot = flights.iter_mut().find(|stored| stored.id == flight.id)?;
        *slot = flight.clone();
        debug!(flight_id = %flight.id, "Replaced flight");
        Some(flight)
    }

    fn delete_by_id(&self, id: Uuid) -> bool {
        let mut flights = self.flights.write();
        let before = flights.len();
        flights.retain(|flight| flight.id != id);
        let removed = flights.len() != before;
        if removed {
            debug!(flight_id = %id, "Deleted flight");
        }
        removed
    }

    fn find_by_route(&self, origin: &str, destination: &str) -> Vec<Flight> {
        self.filter(|flight| flight.is_on_route(origin, destination))
    }

    fn find_by_status(&self, status: &str) -> Vec<Flight> {
        self.filter(|flight| flight.status.matches(status))
    }

    fn find_by_date(&self, date: NaiveDate) -> Vec<Flight> {
        self.filter(|flight| flight.date == date)
    }

    fn find_by_date_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<Flight> {
        self.filter(|flight| flight.date >= start && flight.date <= end)
    }

    fn find_by_plane(&self, plane_id: &str) -> Vec<Flight> {
        self.filter(|flight| flight.plane_id == plane_id)
    }

    fn find_by_pilot(&self, pilot_id: &str) -> Vec<Flight> {
        self.filter(|flight| flight.pilot_id == pilot_id)
    }

    fn find_by_route_and_date(&self, origin: &str, destination: &str, date: NaiveDate) -> Vec<Flight> {
        self.filter(|flight| flight.is_on_route(origin, destination) && flight.date == date)
    }

    fn find_by_price_range(&self, min: f64, max: f64) -> Vec<Flight> {
        self.filter(|flight| flight.base_price >= min && flight.base_price <= max)
    }

    fn find_upcoming(&self, date: NaiveDate, time: NaiveTime, margin_hours: u32) -> Vec<Flight> {
        let window = DepartureWindow::upcoming(date, time, margin_hours);
        self.filter(|flight| window.contains(flight))
    }

    fn has_availability(&self, id: Uuid, requested_seats: u32) -> bool {
        self.flights
            .read()
            .iter()
            .find(|flight| flight.id == id)
            .is_some_and(|flight| flight.available_seats >= requested_seats)
    }

    fn reserve(&self, id: Uuid, seats: u32) -> SeatReservation {
        let mut flights = self.flights.write();
        let Some(flight) = flights.iter_mut().find(|flight| flight.id == id) else {
            return SeatReservation::NotFound;
        };

        if flight.available_seats < seats {
            warn!(
                flight_id = %id,
                requested = seats,
                available = flight.available_seats,
                "Seat reservation refused"
            );
            return SeatReservation::Refused(flight.clone());
        }

        flight.available_seats -= seats;
        debug!(flight_id = %id, seats, remaining = flight.available_seats, "Seats reserved");
        SeatReservation::Reserved(flight.clone())
    }

    fn update_status(&self, id: Uuid, status: FlightStatus) -> bool {
        self.modify(id, |flight| flight.status = status)
    }

    fn cancel_flight(&self, id: Uuid) -> bool {
        self.modify(id, |flight| {
            flight.status = FlightStatus::Cancelled;
            flight.available_seats = 0;
        })
    }

    fn reassign_plane(&self, id: Uuid, plane_id: &str) -> bool {
        self.modify(id, |flight| flight.plane_id = plane_id.to_string())
    }

    fn count_by_status(&self, status: &str) -> usize {
        self.flights
            .read()
            .iter()
            .filter(|flight| flight.status.matches(status))
            .count()
    }

    fn find_cheapest(&self) -> Option<Flight> {
        // min_by keeps the first of equal minima
        self.flights
            .read()
            .iter()
            .min_by(|a, b| a.base_price.total_cmp(&b.base_price))
            .cloned()
    }

    fn find_longest(&self, top: usize) -> Vec<Flight> {
        let mut flights = self.find_all();
        flights.sort_by(|a, b| b.duration_minutes.cmp(&a.duration_minutes));
        flights.truncate(top);
        flights
    }
}
