pub mod flight;
pub mod status;
pub mod search;
pub mod repository;

pub use flight::Flight;
pub use status::FlightStatus;
pub use repository::{FlightRepository, SeatReservation};

use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Flight not found: {0}")]
    NotFound(Uuid),
    #[error("Flight id already in use: {0}")]
    DuplicateId(Uuid),
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}

pub type CoreResult<T> = Result<T, CoreError>;

/// Case-insensitive text equality using full Unicode lower-casing,
/// so "BOGOTÁ" and "bogotá" compare equal.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
