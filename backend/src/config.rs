use std::env;
use std::path::PathBuf;
use dotenv::dotenv;
use log::{info, warn};

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_DATA_PATH: &str = "data/raw/supply_chain_data.csv";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl Default for Environment {
    fn default() -> Self {
        Environment::Development
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dev" | "development" => Ok(Environment::Development),
            "test" => Ok(Environment::Test),
            "prod" | "production" => Ok(Environment::Production),
            _ => Err(format!("Unknown environment: {}", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: Environment,
    pub server: ServerConfig,
    pub data: DataConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

#[derive(Debug, Clone)]
pub struct DataConfig {
    /// CSV export the dashboard is computed from
    pub csv_path: PathBuf,
}

impl Config {
    fn parse_backend_url(url: &str, default_host: &str) -> (String, u16) {
        // BACKEND_URL looks like "http://localhost:5000" or "http://0.0.0.0:5000"
        if let Ok(parsed_url) = url::Url::parse(url) {
            let host = parsed_url.host_str().unwrap_or(default_host).to_string();
            let port = parsed_url.port().unwrap_or(DEFAULT_PORT);
            (host, port)
        } else {
            warn!("Could not parse BACKEND_URL '{}', using defaults", url);
            (default_host.to_string(), DEFAULT_PORT)
        }
    }

    /// Loads `.env` (or the file named by `ENV_FILE_PATH`) and then reads
    /// the process environment.
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        match env::var("ENV_FILE_PATH") {
            Ok(env_file_path) if !env_file_path.is_empty() => {
                info!("Loading environment from ENV_FILE_PATH: {}", env_file_path);
                dotenv::from_filename(&env_file_path).ok();
            }
            _ => {
                dotenv().ok();
            }
        }

        let config = Self::from_vars(|key| env::var(key).ok())?;
        config.log_configuration();
        Ok(config)
    }

    /// Builds and validates a configuration from an arbitrary variable source.
    pub fn from_vars<F>(var: F) -> Result<Self, Box<dyn std::error::Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = var("RUST_ENV")
            .map(|raw| raw.parse::<Environment>())
            .transpose()?
            .unwrap_or_default();

        info!("Loading configuration for environment: {:?}", environment);

        let config = Config {
            environment,
            server: Self::load_server_config(&environment, &var),
            data: Self::load_data_config(&var),
        };

        config.validate()?;
        Ok(config)
    }

    fn load_server_config<F>(env: &Environment, var: &F) -> ServerConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        let (default_host, default_workers) = match env {
            Environment::Development | Environment::Test => ("127.0.0.1", 1),
            Environment::Production => ("0.0.0.0", 4),
        };

        let (host, port) = match var("BACKEND_URL") {
            Some(url) => Self::parse_backend_url(&url, default_host),
            None => (default_host.to_string(), DEFAULT_PORT),
        };

        ServerConfig {
            // SERVER_HOST takes precedence over the host in BACKEND_URL
            host: var("SERVER_HOST").unwrap_or(host),
            port: var("SERVER_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(port),
            workers: var("BACKEND_WORKERS")
                .and_then(|w| w.parse().ok())
                .unwrap_or(default_workers),
        }
    }

    fn load_data_config<F>(var: &F) -> DataConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        DataConfig {
            csv_path: var("DASHBOARD_DATA_PATH")
                .unwrap_or_else(|| DEFAULT_DATA_PATH.to_string())
                .into(),
        }
    }

    fn validate(&self) -> Result<(), Box<dyn std::error::Error>> {
        if self.server.port == 0 {
            return Err("Server port cannot be 0".into());
        }
        if self.server.workers == 0 {
            return Err("Worker count cannot be 0".into());
        }
        if self.data.csv_path.as_os_str().is_empty() {
            return Err("Dashboard data path cannot be empty".into());
        }

        Ok(())
    }

    fn log_configuration(&self) {
        info!("Configuration loaded successfully");
        info!("Environment: {:?}", self.environment);
        info!("Server: {}:{} (workers: {})", self.server.host, self.server.port, self.server.workers);
        info!("Dashboard data: {}", self.data.csv_path.display());

        if !self.data.csv_path.exists() {
            warn!("Dashboard data file does not exist yet - /api/dashboard will answer 404");
        }
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, Box<dyn std::error::Error>> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!("development".parse::<Environment>().unwrap(), Environment::Development);
        assert_eq!("dev".parse::<Environment>().unwrap(), Environment::Development);
        assert_eq!("test".parse::<Environment>().unwrap(), Environment::Test);
        assert_eq!("production".parse::<Environment>().unwrap(), Environment::Production);
        assert_eq!("PROD".parse::<Environment>().unwrap(), Environment::Production);
        assert!("staging".parse::<Environment>().is_err());
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert!(config.is_development());
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.workers, 1);
        assert_eq!(config.data.csv_path, PathBuf::from(DEFAULT_DATA_PATH));
    }

    #[test]
    fn test_production_defaults() {
        let config = config_from(&[("RUST_ENV", "production")]).unwrap();
        assert!(config.is_production());
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.workers, 4);
    }

    #[test]
    fn test_backend_url_and_overrides() {
        let config = config_from(&[
            ("BACKEND_URL", "http://localhost:6001"),
            ("SERVER_PORT", "7000"),
            ("DASHBOARD_DATA_PATH", "/srv/data/supply.csv"),
        ])
        .unwrap();
        assert_eq!(config.server.host, "localhost");
        assert_eq!(config.server.port, 7000);
        assert_eq!(config.data.csv_path, PathBuf::from("/srv/data/supply.csv"));
    }

    #[test]
    fn test_unparseable_port_falls_back() {
        let config = config_from(&[("SERVER_PORT", "not-a-port")]).unwrap();
        assert_eq!(config.server.port, DEFAULT_PORT);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(config_from(&[("RUST_ENV", "staging")]).is_err());
        assert!(config_from(&[("SERVER_PORT", "0")]).is_err());
        assert!(config_from(&[("BACKEND_WORKERS", "0")]).is_err());
        assert!(config_from(&[("DASHBOARD_DATA_PATH", "")]).is_err());
    }
}
