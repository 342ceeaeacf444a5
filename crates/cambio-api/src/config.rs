//! Configuration management for the currency-conversion webhook service.

use std::{net::SocketAddr, str::FromStr, time::Duration};

use anyhow::{Context, Result};
use cambio_rates::ClientConfig;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

const CONFIG_FILE: &str = "config.toml";

/// Complete service configuration with defaults, file, and environment
/// overrides.
///
/// Configuration is loaded in priority order:
/// 1. Environment variables (highest priority)
/// 2. Configuration file (`config.toml`)
/// 3. Built-in defaults (lowest priority)
///
/// The service works out-of-the-box against the public Frankfurter API.
/// Create `config.toml` to customize configuration for your environment.
/// Use environment variables for deployment-specific overrides.
///
/// # Example
///
/// ```no_run
/// use cambio_api::Config;
///
/// let config = Config::load().expect("Failed to load configuration");
///
/// println!("Server will bind to {}:{}", config.host, config.port);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Server
    /// Server bind address.
    ///
    /// Environment variable: `HOST`
    #[serde(default = "default_host", alias = "HOST")]
    pub host: String,
    /// Server bind port.
    ///
    /// Environment variable: `PORT`
    #[serde(default = "default_port", alias = "PORT")]
    pub port: u16,
    /// Inbound HTTP request timeout in seconds.
    ///
    /// Environment variable: `REQUEST_TIMEOUT`
    #[serde(default = "default_request_timeout", alias = "REQUEST_TIMEOUT")]
    pub request_timeout: u64,

    // Rates
    /// Base URL of the currency-rate service.
    ///
    /// Environment variable: `RATES_BASE_URL`
    #[serde(default = "default_rates_base_url", alias = "RATES_BASE_URL")]
    pub rates_base_url: String,
    /// HTTP request timeout for rate lookups in seconds.
    ///
    /// Environment variable: `RATES_TIMEOUT_SECONDS`
    #[serde(default = "default_rates_timeout", alias = "RATES_TIMEOUT_SECONDS")]
    pub rates_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from defaults, config file, and environment variable
    /// overrides.
    ///
    /// Configuration priority (highest to lowest):
    /// 1. Environment variables (e.g., `PORT`, `RATES_BASE_URL`)
    /// 2. Configuration file (`config.toml`)
    /// 3. Built-in defaults (production-ready values)
    pub fn load() -> Result<Self> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(""));

        let config: Self = figment.extract().context("Failed to load configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Convert to the rates crate's client configuration.
    pub fn to_client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.rates_base_url.clone(),
            timeout: Duration::from_secs(self.rates_timeout_seconds),
            user_agent: "Cambio/1.0".to_string(),
        }
    }

    /// Parse server socket address from host and port configuration.
    pub fn parse_server_addr(&self) -> Result<SocketAddr> {
        let addr_str = format!("{}:{}", self.host, self.port);
        SocketAddr::from_str(&addr_str).context("Invalid server address")
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<()> {
        if self.port == 0 {
            anyhow::bail!("port must be greater than 0");
        }

        if self.request_timeout == 0 {
            anyhow::bail!("request_timeout must be greater than 0");
        }

        if self.rates_timeout_seconds == 0 {
            anyhow::bail!("rates_timeout_seconds must be greater than 0");
        }

        // A rate lookup must fit inside the inbound request window, or the
        // caller sees a timeout instead of the fallback reply.
        if self.rates_timeout_seconds >= self.request_timeout {
            anyhow::bail!("rates_timeout_seconds must be below request_timeout");
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout: default_request_timeout(),
            rates_base_url: default_rates_base_url(),
            rates_timeout_seconds: default_rates_timeout(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_request_timeout() -> u64 {
    30
}

fn default_rates_base_url() -> String {
    cambio_rates::DEFAULT_BASE_URL.to_string()
}

fn default_rates_timeout() -> u64 {
    cambio_rates::DEFAULT_TIMEOUT_SECONDS
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, env, sync::Mutex};

    use super::*;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct TestEnvGuard {
        _lock: std::sync::MutexGuard<'static, ()>,
        vars: Vec<String>,
        originals: HashMap<String, Option<String>>,
    }

    impl TestEnvGuard {
        fn new() -> Self {
            let lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            Self { _lock: lock, vars: Vec::new(), originals: HashMap::new() }
        }

        fn set_var(&mut self, key: &str, value: &str) {
            if !self.vars.contains(&key.to_string()) {
                self.originals.insert(key.to_string(), env::var(key).ok());
                self.vars.push(key.to_string());
            }
            env::set_var(key, value);
        }
    }

    impl Drop for TestEnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                match self.originals.get(var) {
                    Some(Some(value)) => env::set_var(var, value),
                    Some(None) => env::remove_var(var),
                    None => {},
                }
            }
        }
    }

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.request_timeout, 30);
        assert_eq!(config.rates_base_url, "https://api.frankfurter.app");
        assert_eq!(config.rates_timeout_seconds, 10);
    }

    #[test]
    fn env_variables_override_defaults() {
        let mut guard = TestEnvGuard::new();
        guard.set_var("HOST", "0.0.0.0");
        guard.set_var("PORT", "9090");
        guard.set_var("REQUEST_TIMEOUT", "60");
        guard.set_var("RATES_BASE_URL", "http://rates.internal:8000");
        guard.set_var("RATES_TIMEOUT_SECONDS", "5");

        let config = Config::load().expect("Config should load with env overrides");

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9090);
        assert_eq!(config.request_timeout, 60);
        assert_eq!(config.rates_base_url, "http://rates.internal:8000");
        assert_eq!(config.rates_timeout_seconds, 5);
    }

    #[test]
    fn invalid_config_validation_fails() {
        let mut config = Config::default();

        // Invalid port
        config.port = 0;
        assert!(config.validate().is_err());

        // Reset and test zero request timeout
        config = Config::default();
        config.request_timeout = 0;
        assert!(config.validate().is_err());

        // Reset and test zero rates timeout
        config = Config::default();
        config.rates_timeout_seconds = 0;
        assert!(config.validate().is_err());

        // Reset and test rates timeout at or above the request window
        config = Config::default();
        config.request_timeout = 10;
        config.rates_timeout_seconds = 10;
        assert!(config.validate().is_err());
    }

    #[test]
    fn client_config_conversion() {
        let mut config = Config::default();
        config.rates_base_url = "http://rates.internal:8000".to_string();
        config.rates_timeout_seconds = 7;

        let client_config = config.to_client_config();

        assert_eq!(client_config.base_url, "http://rates.internal:8000");
        assert_eq!(client_config.timeout, Duration::from_secs(7));
        assert_eq!(client_config.user_agent, "Cambio/1.0");
    }

    #[test]
    fn socket_address_parsing() {
        let mut config = Config::default();
        config.host = "127.0.0.1".to_string();
        config.port = 9000;

        let addr = config.parse_server_addr().expect("Should parse socket address");

        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 9000);
    }

    #[test]
    fn invalid_host_rejected() {
        let mut config = Config::default();
        config.host = "not an address".to_string();

        assert!(config.parse_server_addr().is_err());
    }
}
