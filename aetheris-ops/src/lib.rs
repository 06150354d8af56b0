pub mod operations;
pub mod seed;

pub use operations::{FlightOperations, PreloadReport};
