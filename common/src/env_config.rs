use std::{env, sync::Arc};

use crate::{request::MAX_AMOUNT, status::StatusPolicy};

#[derive(Clone, Debug)]
/// Configuration struct for the server.
///
/// This struct holds all the necessary configuration parameters
/// required to initialize and run the server.
/// It includes database connection details, server host and port,
/// number of worker threads, CORS settings, logging preferences,
/// the payment status policy and the request defaults applied to
/// checkout submissions.
pub struct Config {
    // environment
    pub environment: String, // development or production
    /// The URL of the SQLite database to connect to.
    pub database_url: String,
    /// The hostname or IP address the server will bind to.
    pub server_host: String,
    /// The port number the server will listen on.
    pub server_port: u16,
    /// The number of worker threads to spawn for handling requests.
    pub num_workers: usize,
    /// The allowed origin for CORS. `*` allows any origin.
    pub cors_allowed_origin: String,
    /// A boolean indicating whether console logging is enabled.
    pub console_logging_enabled: bool,
    /// File the logger appends to in addition to stdout.
    pub log_file: String,
    /// Which payment status strings are accepted.
    pub payment_status_policy: StatusPolicy,
    /// Values used when a checkout request omits a field.
    pub defaults: CheckoutDefaults,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Fallback values for fields a client may leave out of a checkout request.
pub struct CheckoutDefaults {
    /// Amount in minor currency units.
    pub amount: i64,
    /// Currency code.
    pub currency: String,
    /// Payment provider tag.
    pub provider: String,
}

impl Default for CheckoutDefaults {
    fn default() -> Self {
        CheckoutDefaults {
            amount: 399,
            currency: "INR".to_string(),
            provider: "manual".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::from_vars(|_| None)
    }
}

impl Config {
    /// Creates a new `Config` instance from environment variables.
    ///
    /// Loads `.env` first if present. Every setting has a default, so the
    /// server starts without any environment at all.
    ///
    /// # Environment Variables
    ///
    /// - `ENVIRONMENT`: "development" or "production" (default: "development")
    /// - `DATABASE_URL`: SQLite connection string (default: "sqlite://store.db")
    /// - `IP`: Server host (default: "127.0.0.1")
    /// - `PORT`: Server port (default: 3000)
    /// - `WORKERS`: Number of worker threads (default: 4)
    /// - `CORS_ALLOWED_ORIGIN`: Allowed CORS origin (default: "*")
    /// - `ENABLE_CONSOLE_LOGGING`: Whether to enable console logging (default: true)
    /// - `LOG_FILE`: Log file path (default: "checkout.log")
    /// - `PAYMENT_STATUS_POLICY`: "passthrough" or "strict" (default: "passthrough")
    /// - `DEFAULT_AMOUNT`, `DEFAULT_CURRENCY`, `DEFAULT_PROVIDER`: request defaults
    ///   (default: 399, "INR", "manual")
    ///
    /// Values that fail to parse fall back to their defaults.
    pub fn from_env() -> Arc<Self> {
        dotenvy::dotenv().ok();
        Arc::new(Config::from_vars(|key| env::var(key).ok()))
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let fallback = CheckoutDefaults::default();

        Config {
            environment: var("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
            database_url: var("DATABASE_URL").unwrap_or_else(|| "sqlite://store.db".to_string()),
            server_host: var("IP").unwrap_or_else(|| "127.0.0.1".to_string()),
            server_port: var("PORT")
                .and_then(|port| port.parse().ok())
                .unwrap_or(3000),
            num_workers: var("WORKERS")
                .and_then(|workers| workers.parse().ok())
                .unwrap_or(4),
            cors_allowed_origin: var("CORS_ALLOWED_ORIGIN").unwrap_or_else(|| "*".to_string()),
            console_logging_enabled: var("ENABLE_CONSOLE_LOGGING")
                .unwrap_or_else(|| "true".to_string())
                .to_lowercase()
                == "true",
            log_file: var("LOG_FILE").unwrap_or_else(|| "checkout.log".to_string()),
            payment_status_policy: var("PAYMENT_STATUS_POLICY")
                .and_then(|policy| policy.parse().ok())
                .unwrap_or_default(),
            defaults: CheckoutDefaults {
                amount: var("DEFAULT_AMOUNT")
                    .and_then(|amount| amount.parse::<i64>().ok())
                    .filter(|amount| (1..=MAX_AMOUNT).contains(amount))
                    .unwrap_or(fallback.amount),
                currency: var("DEFAULT_CURRENCY")
                    .filter(|currency| !currency.trim().is_empty())
                    .unwrap_or(fallback.currency),
                provider: var("DEFAULT_PROVIDER")
                    .filter(|provider| !provider.trim().is_empty())
                    .unwrap_or(fallback.provider),
            },
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
