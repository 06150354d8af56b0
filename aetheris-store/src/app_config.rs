use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub inventory: InventoryConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct InventoryConfig {
    #[serde(default = "default_seed")]
    pub seed_on_startup: bool,
    #[serde(default = "default_upcoming_margin")]
    pub upcoming_margin_hours: u32,
    #[serde(default = "default_longest_top")]
    pub longest_flights_top: usize,
}

fn default_seed() -> bool { true }
fn default_upcoming_margin() -> u32 { 2 }
fn default_longest_top() -> usize { 3 }

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            seed_on_startup: default_seed(),
            upcoming_margin_hours: default_upcoming_margin(),
            longest_flights_top: default_longest_top(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Per-environment overrides are optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local, uncommitted overrides
            .add_source(config::File::with_name("config/local").required(false))
            // Eg.. `AETHERIS_SERVER__PORT=9090` sets `server.port`
            .add_source(Self::environment())
            .build()?;

        s.try_deserialize()
    }

    /// `AETHERIS_` prefix, `__` between nested keys.
    fn environment() -> config::Environment {
        config::Environment::with_prefix("AETHERIS")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{File, FileFormat};

    fn from_toml(raw: &str) -> Result<Config, config::ConfigError> {
        config::Config::builder()
            .add_source(File::from_str(raw, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    #[test]
    fn test_inventory_defaults_when_section_missing() {
        let config = from_toml("[server]\nport = 8080\n").unwrap();
        assert_eq!(config.server.port, 8080);
        assert!(config.inventory.seed_on_startup);
        assert_eq!(config.inventory.upcoming_margin_hours, 2);
        assert_eq!(config.inventory.longest_flights_top, 3);
    }

    #[test]
    fn test_inventory_overrides() {
        let raw = r#"
            [server]
            port = 9090

            [inventory]
            seed_on_startup = false
            upcoming_margin_hours = 6
        "#;
        let config = from_toml(raw).unwrap();
        assert!(!config.inventory.seed_on_startup);
        assert_eq!(config.inventory.upcoming_margin_hours, 6);
        assert_eq!(config.inventory.longest_flights_top, 3);
    }

    #[test]
    fn test_environment_overrides_files() {
        let vars = [
            ("AETHERIS_SERVER__PORT", "9090"),
            ("AETHERIS_INVENTORY__SEED_ON_STARTUP", "false"),
            ("OTHER_SERVER__PORT", "1"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let config: Config = config::Config::builder()
            .add_source(File::from_str("[server]\nport = 8080\n", FileFormat::Toml))
            .add_source(Config::environment().source(Some(vars)))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.server.port, 9090);
        assert!(!config.inventory.seed_on_startup);
        assert_eq!(config.inventory.upcoming_margin_hours, 2);
    }

    #[test]
    fn test_missing_server_section_is_an_error() {
        assert!(from_toml("[inventory]\nseed_on_startup = true\n").is_err());
    }
}
