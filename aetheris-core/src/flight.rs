use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::status::FlightStatus;
use crate::eq_ignore_case;

/// A scheduled flight as tracked by the inventory.
///
/// `plane_id` and `pilot_id` are opaque keys into external systems and are
/// never resolved here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub flight_code: String,
    pub airline: String,
    pub origin: String,
    pub destination: String,
    pub plane_id: String,
    pub pilot_id: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration_minutes: u32,
    #[serde(default)]
    pub status: FlightStatus,
    pub available_seats: u32,
    pub base_price: f64,
}

impl Flight {
    /// Local departure as a single wall-clock timestamp.
    pub fn departure(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    pub fn is_on_route(&self, origin: &str, destination: &str) -> bool {
        eq_ignore_case(&self.origin, origin) && eq_ignore_case(&self.destination, destination)
    }

    pub fn has_code(&self, code: &str) -> bool {
        eq_ignore_case(&self.flight_code, code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flight_deserialization_defaults() {
        let json = r#"
            {
                "flightCode": "AV1234",
                "airline": "Avianca",
                "origin": "Bogotá",
                "destination": "Medellín",
                "planeId": "A320-001",
                "pilotId": "PIL-001",
                "date": "2024-12-25",
                "time": "08:30:00",
                "durationMinutes": 60,
                "availableSeats": 150,
                "basePrice": 350000.0
            }
        "#;
        let flight: Flight = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(flight.flight_code, "AV1234");
        assert_eq!(flight.status, FlightStatus::Scheduled);
        assert_eq!(flight.date, NaiveDate::from_ymd_opt(2024, 12, 25).unwrap());
        assert!(!flight.id.is_nil());
    }

    #[test]
    fn test_route_and_code_matching() {
        let json = r#"
            {
                "id": "7f1c2a5e-3d4b-4c6a-9e8f-0a1b2c3d4e5f",
                "flightCode": "AV9012",
                "airline": "Viva Air",
                "origin": "Bogotá",
                "destination": "Cali",
                "planeId": "B737-003",
                "pilotId": "PIL-003",
                "date": "2024-12-26",
                "time": "14:15:00",
                "durationMinutes": 75,
                "status": "in_flight",
                "availableSeats": 160,
                "basePrice": 390000.0
            }
        "#;
        let flight: Flight = serde_json::from_str(json).unwrap();
        assert_eq!(flight.id.to_string(), "7f1c2a5e-3d4b-4c6a-9e8f-0a1b2c3d4e5f");
        assert_eq!(flight.status, FlightStatus::InFlight);
        assert!(flight.is_on_route("BOGOTÁ", "cali"));
        assert!(!flight.is_on_route("Cali", "Bogotá"));
        assert!(flight.has_code("av9012"));
    }
}
