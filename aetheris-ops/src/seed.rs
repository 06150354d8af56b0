use aetheris_core::{Flight, FlightStatus};
use chrono::{Days, NaiveDate, NaiveTime};
use uuid::Uuid;

struct SeedRow {
    code: &'static str,
    airline: &'static str,
    origin: &'static str,
    destination: &'static str,
    plane_id: &'static str,
    pilot_id: &'static str,
    days_ahead: u64,
    departure: (u32, u32),
    duration_minutes: u32,
    seats: u32,
    price: f64,
    status: FlightStatus,
}

const SEED: [SeedRow; 5] = [
    SeedRow {
        code: "AV1234",
        airline: "Avianca",
        origin: "Bogotá",
        destination: "Medellín",
        plane_id: "A320-001",
        pilot_id: "PIL-001",
        days_ahead: 1,
        departure: (8, 30),
        duration_minutes: 60,
        seats: 150,
        price: 350_000.0,
        status: FlightStatus::Scheduled,
    },
    SeedRow {
        code: "AV5678",
        airline: "LATAM",
        origin: "Medellín",
        destination: "Cartagena",
        plane_id: "A320-002",
        pilot_id: "PIL-002",
        days_ahead: 2,
        departure: (10, 45),
        duration_minutes: 70,
        seats: 180,
        price: 420_000.0,
        status: FlightStatus::Scheduled,
    },
    SeedRow {
        code: "AV9012",
        airline: "Viva Air",
        origin: "Bogotá",
        destination: "Cali",
        plane_id: "B737-003",
        pilot_id: "PIL-003",
        days_ahead: 3,
        departure: (14, 15),
        duration_minutes: 75,
        seats: 160,
        price: 390_000.0,
        status: FlightStatus::Scheduled,
    },
    SeedRow {
        code: "AV3456",
        airline: "Avianca",
        origin: "Cali",
        destination: "Miami",
        plane_id: "B787-004",
        pilot_id: "PIL-004",
        days_ahead: 5,
        departure: (9, 0),
        duration_minutes: 240,
        seats: 250,
        price: 1_500_000.0,
        status: FlightStatus::Maintenance,
    },
    SeedRow {
        code: "AV7890",
        airline: "Iberia",
        origin: "Bogotá",
        destination: "Madrid",
        plane_id: "A350-005",
        pilot_id: "PIL-005",
        days_ahead: 10,
        departure: (19, 45),
        duration_minutes: 600,
        seats: 300,
        price: 2_800_000.0,
        status: FlightStatus::Maintenance,
    },
];

/// Demonstration flights dated relative to `today`.
///
/// Rows whose date would overflow the calendar are skipped.
pub fn demo_flights(today: NaiveDate) -> Vec<Flight> {
    SEED.iter()
        .filter_map(|row| {
            let date = today.checked_add_days(Days::new(row.days_ahead))?;
            let time = NaiveTime::from_hms_opt(row.departure.0, row.departure.1, 0)?;
            Some(Flight {
                id: Uuid::new_v4(),
                flight_code: row.code.to_string(),
                airline: row.airline.to_string(),
                origin: row.origin.to_string(),
                destination: row.destination.to_string(),
                plane_id: row.plane_id.to_string(),
                pilot_id: row.pilot_id.to_string(),
                date,
                time,
                duration_minutes: row.duration_minutes,
                status: row.status.clone(),
                available_seats: row.seats,
                base_price: row.price,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_flights_are_dated_from_today() {
        let today = NaiveDate::from_ymd_opt(2024, 12, 28).unwrap();
        let flights = demo_flights(today);

        assert_eq!(flights.len(), 5);
        assert_eq!(flights[0].flight_code, "AV1234");
        assert_eq!(flights[0].date, NaiveDate::from_ymd_opt(2024, 12, 29).unwrap());
        assert_eq!(flights[4].date, NaiveDate::from_ymd_opt(2025, 1, 7).unwrap());
        assert_eq!(flights[4].status, FlightStatus::Maintenance);
    }

    #[test]
    fn test_demo_flights_get_fresh_ids() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let first = demo_flights(today);
        let second = demo_flights(today);
        assert_ne!(first[0].id, second[0].id);
    }
}
