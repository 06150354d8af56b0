use aetheris_ops::FlightOperations;
use aetheris_store::app_config::InventoryConfig;

#[derive(Clone)]
pub struct AppState {
    pub flights: FlightOperations,
    pub inventory: InventoryConfig,
}
