use serde::{Deserialize, Serialize};
use std::fmt;

use crate::eq_ignore_case;

/// Flight lifecycle status.
///
/// Lifecycle operations only ever produce the canonical variants, but any
/// text is accepted on create/update and kept verbatim in `Other`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum FlightStatus {
    #[default]
    Scheduled,
    InFlight,
    Landed,
    Cancelled,
    Maintenance,
    Other(String),
}

impl FlightStatus {
    pub fn as_str(&self) -> &str {
        match self {
            FlightStatus::Scheduled => "SCHEDULED",
            FlightStatus::InFlight => "IN_FLIGHT",
            FlightStatus::Landed => "LANDED",
            FlightStatus::Cancelled => "CANCELLED",
            FlightStatus::Maintenance => "MAINTENANCE",
            FlightStatus::Other(raw) => raw,
        }
    }

    /// Case-insensitive match against a status name, canonical or not.
    pub fn matches(&self, status: &str) -> bool {
        eq_ignore_case(self.as_str(), status)
    }
}

impl From<&str> for FlightStatus {
    fn from(raw: &str) -> Self {
        const CANONICAL: [FlightStatus; 5] = [
            FlightStatus::Scheduled,
            FlightStatus::InFlight,
            FlightStatus::Landed,
            FlightStatus::Cancelled,
            FlightStatus::Maintenance,
        ];

        CANONICAL
            .into_iter()
            .find(|status| status.matches(raw))
            .unwrap_or_else(|| FlightStatus::Other(raw.to_string()))
    }
}

impl From<String> for FlightStatus {
    fn from(raw: String) -> Self {
        match FlightStatus::from(raw.as_str()) {
            FlightStatus::Other(_) => FlightStatus::Other(raw),
            canonical => canonical,
        }
    }
}

impl From<FlightStatus> for String {
    fn from(status: FlightStatus) -> Self {
        match status {
            FlightStatus::Other(raw) => raw,
            canonical => canonical.as_str().to_string(),
        }
    }
}

impl fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(FlightStatus::from("scheduled"), FlightStatus::Scheduled);
        assert_eq!(FlightStatus::from("In_Flight"), FlightStatus::InFlight);
        assert_eq!(FlightStatus::from("CANCELLED"), FlightStatus::Cancelled);
    }

    #[test]
    fn test_unknown_status_is_kept_verbatim() {
        let status = FlightStatus::from("Delayed");
        assert_eq!(status, FlightStatus::Other("Delayed".to_string()));
        assert_eq!(status.as_str(), "Delayed");
        assert!(status.matches("DELAYED"));
    }

    #[test]
    fn test_status_serializes_as_plain_string() {
        let json = serde_json::to_string(&FlightStatus::InFlight).unwrap();
        assert_eq!(json, r#""IN_FLIGHT""#);

        let status: FlightStatus = serde_json::from_str(r#""maintenance""#).unwrap();
        assert_eq!(status, FlightStatus::Maintenance);

        let other: FlightStatus = serde_json::from_str(r#""MANTENIMIENTO""#).unwrap();
        assert_eq!(other.to_string(), "MANTENIMIENTO");
    }
}
