use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

pub const DEFAULT_PRICING_URL: &str =
    "https://raw.githubusercontent.com/sspro-installs/Green-Go-Designer/main/pricing.json";
pub const DEFAULT_FORM_ENDPOINT: &str = "https://formspree.io/f/mqagbger";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so only malformed values fail.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let env = parse_environment(&or_default("COMMSBOM_ENV", "development"))?;
    let log_level = or_default("COMMSBOM_LOG_LEVEL", "info");

    let pricing_url = Some(or_default("COMMSBOM_PRICING_URL", DEFAULT_PRICING_URL))
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty());
    let form_endpoint = or_default("COMMSBOM_FORM_ENDPOINT", DEFAULT_FORM_ENDPOINT);
    if form_endpoint.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "COMMSBOM_FORM_ENDPOINT".to_string(),
            reason: "must be non-empty".to_string(),
        });
    }

    let store_dir = PathBuf::from(or_default("COMMSBOM_STORE_DIR", "./.commsbom"));
    let store_quota_bytes = parse_usize("COMMSBOM_STORE_QUOTA_BYTES", "5242880")?;

    let http_timeout_secs = parse_u64("COMMSBOM_HTTP_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("COMMSBOM_USER_AGENT", "commsbom/0.1 (intercom-designer)");
    let pricing_max_retries = parse_u32("COMMSBOM_PRICING_MAX_RETRIES", "2")?;
    let pricing_retry_backoff_ms = parse_u64("COMMSBOM_PRICING_RETRY_BACKOFF_MS", "500")?;

    Ok(AppConfig {
        env,
        log_level,
        pricing_url,
        form_endpoint,
        store_dir,
        store_quota_bytes,
        http_timeout_secs,
        user_agent,
        pricing_max_retries,
        pricing_retry_backoff_ms,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "COMMSBOM_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
