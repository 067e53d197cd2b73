use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the onboarding service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub onboarding: OnboardingConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("STUTTZ_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("STUTTZ_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("STUTTZ_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("STUTTZ_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let session_capacity = match env::var("STUTTZ_SESSION_CAPACITY") {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|capacity| *capacity > 0)
                .ok_or(ConfigError::InvalidSessionCapacity(raw))?,
            Err(_) => OnboardingConfig::DEFAULT_SESSION_CAPACITY,
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            onboarding: OnboardingConfig { session_capacity },
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Limits for the in-memory onboarding session store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OnboardingConfig {
    pub session_capacity: usize,
}

impl OnboardingConfig {
    pub const DEFAULT_SESSION_CAPACITY: usize = 1024;
}

impl Default for OnboardingConfig {
    fn default() -> Self {
        Self {
            session_capacity: Self::DEFAULT_SESSION_CAPACITY,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidSessionCapacity(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "STUTTZ_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "STUTTZ_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidSessionCapacity(value) => write!(
                f,
                "STUTTZ_SESSION_CAPACITY must be a positive integer, got '{}'",
                value
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidSessionCapacity(_) => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}
