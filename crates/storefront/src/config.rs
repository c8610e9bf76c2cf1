//! Storefront configuration loaded from environment variables.
//!
//! Every variable is optional; an empty environment gives a working local
//! setup with the shop's real payment and WhatsApp details.
//!
//! # Environment Variables
//!
//! ## Server
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `STOREFRONT_BASE_URL` - Public URL (default: <http://localhost:3000>)
//! - `STOREFRONT_DATA_DIR` - Directory for catalog and wishlist JSON (default: data)
//!
//! ## Payments and order handoff
//! - `MERCHANT_NAME` - Merchant name in UPI links (default: cakes n bells)
//! - `UPI_PAYEE_STANDARD`, `UPI_PAYEE_PREMIUM`, `UPI_PAYEE_LUXURY` - Payee per tier
//! - `UPI_CONTACT_NUMBER` - Number shown for manual transfers
//! - `QR_SIZE` - QR image edge in pixels (default: 300)
//! - `QR_COLOR` - QR foreground colour, 6 hex digits (default: da82b8)
//! - `WHATSAPP_NUMBER` - Business number orders are sent to
//!
//! ## Admin
//! - `ADMIN_PASSWORD_SHA256` - Hex SHA-256 of the admin password
//! - `ADMIN_FALLBACK_PASSWORD` - Plaintext password used only if the digest is unusable
//!
//! ## Observability
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Transaction sample rate (default: 0.0)
//! - `LOG_FORMAT` - `json` for structured logs, anything else for text

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use cakes_n_bells_core::auth::{DEFAULT_PASSWORD_DIGEST, DigestGate, is_valid_digest};
use cakes_n_bells_core::handoff::DEFAULT_WHATSAPP_NUMBER;
use cakes_n_bells_core::payment::{
    DEFAULT_CONTACT_NUMBER, DEFAULT_MERCHANT_NAME, DEFAULT_PAYEE_ID, DEFAULT_QR_COLOR,
    DEFAULT_QR_SIZE, PayeeDirectory, PaymentLinkBuilder,
};
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// Directory holding the persisted catalog and wishlist
    pub data_dir: PathBuf,
    /// UPI payment settings
    pub payment: PaymentConfig,
    /// Business number that receives orders
    pub whatsapp_number: String,
    /// Admin gate settings
    pub admin: AdminConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    pub sentry_environment: Option<String>,
    pub sentry_sample_rate: f32,
    pub sentry_traces_sample_rate: f32,
    /// Emit JSON logs instead of text
    pub json_logs: bool,
}

/// UPI payment configuration.
#[derive(Debug, Clone)]
pub struct PaymentConfig {
    pub merchant_name: String,
    pub payees: PayeeDirectory,
    /// Shown next to the QR code so customers can pay by number
    pub contact_number: String,
    pub qr_size: u32,
    pub qr_color: String,
}

impl PaymentConfig {
    /// Link builder for these settings.
    #[must_use]
    pub fn link_builder(&self) -> PaymentLinkBuilder {
        PaymentLinkBuilder::new(
            self.payees.clone(),
            self.merchant_name.clone(),
            self.qr_size,
            self.qr_color.clone(),
        )
    }
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            merchant_name: DEFAULT_MERCHANT_NAME.to_string(),
            payees: PayeeDirectory::default(),
            contact_number: DEFAULT_CONTACT_NUMBER.to_string(),
            qr_size: DEFAULT_QR_SIZE,
            qr_color: DEFAULT_QR_COLOR.to_string(),
        }
    }
}

/// Admin gate configuration.
///
/// Implements `Debug` manually to redact the fallback password.
#[derive(Clone)]
pub struct AdminConfig {
    /// Expected hex SHA-256 of the admin password
    pub password_sha256: String,
    /// Plaintext fallback, used only when `password_sha256` is unusable
    pub fallback_password: Option<SecretString>,
}

impl AdminConfig {
    /// Build the password gate for this configuration.
    #[must_use]
    pub fn authenticator(&self) -> DigestGate {
        DigestGate::new(
            Some(&self.password_sha256),
            self.fallback_password
                .as_ref()
                .map(|secret| secret.expose_secret().to_owned()),
        )
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            password_sha256: DEFAULT_PASSWORD_DIGEST.to_string(),
            fallback_password: None,
        }
    }
}

impl std::fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminConfig")
            .field("password_sha256", &self.password_sha256)
            .field(
                "fallback_password",
                &self.fallback_password.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(&|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_lookup(env: &dyn Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = parse_env(env, "STOREFRONT_HOST", "127.0.0.1")?;
        let port = parse_env(env, "STOREFRONT_PORT", "3000")?;
        let base_url = get_env_or_default(env, "STOREFRONT_BASE_URL", "http://localhost:3000");
        Url::parse(&base_url).map_err(|e| {
            ConfigError::InvalidEnvVar("STOREFRONT_BASE_URL".to_string(), e.to_string())
        })?;
        let data_dir = PathBuf::from(get_env_or_default(env, "STOREFRONT_DATA_DIR", "data"));

        let payment = PaymentConfig::from_lookup(env)?;
        let whatsapp_number = get_env_or_default(env, "WHATSAPP_NUMBER", DEFAULT_WHATSAPP_NUMBER);
        if !whatsapp_number.chars().any(|c| c.is_ascii_digit()) {
            return Err(ConfigError::InvalidEnvVar(
                "WHATSAPP_NUMBER".to_string(),
                "must contain digits".to_string(),
            ));
        }
        let admin = AdminConfig::from_lookup(env);

        Ok(Self {
            host,
            port,
            base_url,
            data_dir,
            payment,
            whatsapp_number,
            admin,
            sentry_dsn: get_optional_env(env, "SENTRY_DSN"),
            sentry_environment: get_optional_env(env, "SENTRY_ENVIRONMENT"),
            sentry_sample_rate: parse_env(env, "SENTRY_SAMPLE_RATE", "1.0")?,
            sentry_traces_sample_rate: parse_env(env, "SENTRY_TRACES_SAMPLE_RATE", "0.0")?,
            json_logs: get_optional_env(env, "LOG_FORMAT")
                .is_some_and(|format| format.eq_ignore_ascii_case("json")),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Returns true if session cookies must be marked secure.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

impl PaymentConfig {
    fn from_lookup(env: &dyn Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let qr_color = get_env_or_default(env, "QR_COLOR", DEFAULT_QR_COLOR);
        if qr_color.len() != 6 || !qr_color.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ConfigError::InvalidEnvVar(
                "QR_COLOR".to_string(),
                "must be 6 hex digits".to_string(),
            ));
        }

        Ok(Self {
            merchant_name: get_env_or_default(env, "MERCHANT_NAME", DEFAULT_MERCHANT_NAME),
            payees: PayeeDirectory {
                standard: get_env_or_default(env, "UPI_PAYEE_STANDARD", DEFAULT_PAYEE_ID),
                premium: get_env_or_default(env, "UPI_PAYEE_PREMIUM", DEFAULT_PAYEE_ID),
                luxury: get_env_or_default(env, "UPI_PAYEE_LUXURY", DEFAULT_PAYEE_ID),
            },
            contact_number: get_env_or_default(env, "UPI_CONTACT_NUMBER", DEFAULT_CONTACT_NUMBER),
            qr_size: parse_env(env, "QR_SIZE", &DEFAULT_QR_SIZE.to_string())?,
            qr_color,
        })
    }
}

impl AdminConfig {
    fn from_lookup(env: &dyn Fn(&str) -> Option<String>) -> Self {
        let password_sha256 =
            get_env_or_default(env, "ADMIN_PASSWORD_SHA256", DEFAULT_PASSWORD_DIGEST);
        if !is_valid_digest(password_sha256.trim()) {
            tracing::warn!("ADMIN_PASSWORD_SHA256 is not a 64-character hex digest");
        }

        Self {
            password_sha256,
            fallback_password: get_optional_env(env, "ADMIN_FALLBACK_PASSWORD")
                .map(SecretString::from),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional variable. Empty values count as unset.
fn get_optional_env(env: &dyn Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    env(key).filter(|value| !value.is_empty())
}

/// Get a variable with a default value.
fn get_env_or_default(env: &dyn Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    get_optional_env(env, key).unwrap_or_else(|| default.to_string())
}

/// Parse a variable, falling back to `default` when unset.
fn parse_env<T>(
    env: &dyn Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    get_env_or_default(env, key, default)
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}
