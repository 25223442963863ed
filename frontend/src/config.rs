use log::{debug, warn};
use std::env;

/// Backend address used while developing against a locally running API.
pub const DEV_API_BASE_URL: &str = "http://localhost:5000/api";

/// Deployed builds are served from the same origin as the API, so requests
/// stay relative and the reverse proxy routes `/api` to the backend.
pub const PROD_API_BASE_URL: &str = "/api";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dev" | "development" => Ok(Environment::Development),
            "test" => Ok(Environment::Test),
            "prod" | "production" => Ok(Environment::Production),
            _ => Err(format!("Unknown environment: {}", s)),
        }
    }
}

impl Environment {
    /// Reads `RUST_ENV`, falling back to the build profile.
    pub fn detect() -> Self {
        Self::detect_from(env::var("RUST_ENV").ok().as_deref())
    }

    pub fn detect_from(value: Option<&str>) -> Self {
        match value.map(str::parse::<Environment>) {
            Some(Ok(environment)) => environment,
            Some(Err(e)) => {
                warn!("{}, falling back to build profile", e);
                Self::from_build_profile()
            }
            None => Self::from_build_profile(),
        }
    }

    fn from_build_profile() -> Self {
        if cfg!(debug_assertions) {
            Environment::Development
        } else {
            Environment::Production
        }
    }

    pub fn is_development(&self) -> bool {
        *self == Environment::Development
    }
}

/// API settings shared by every request the UI issues.
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_base_url: String,
}

impl Config {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
        }
    }

    pub fn for_environment(environment: Environment) -> Self {
        let api_base_url = if environment.is_development() {
            DEV_API_BASE_URL
        } else {
            PROD_API_BASE_URL
        };
        debug!("Using API base URL {} for {:?}", api_base_url, environment);
        Self::new(api_base_url)
    }

    pub fn from_env() -> Self {
        Self::for_environment(Environment::detect())
    }

    pub fn is_relative(&self) -> bool {
        self.api_base_url.starts_with('/')
    }
}
