use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Default origin for site-relative cover paths such as `/wp-content/uploads/...`.
pub const DEFAULT_IMAGE_ORIGIN: &str = "https://jdreditora.com.br";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files; useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup, no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
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

    let site_url = require("PORTFOLIO_SITE_URL")?;
    if !site_url.starts_with("http://") && !site_url.starts_with("https://") {
        return Err(ConfigError::InvalidEnvVar {
            var: "PORTFOLIO_SITE_URL".to_string(),
            reason: format!("expected an http(s) URL, got \"{site_url}\""),
        });
    }

    let env = parse_environment(&or_default("PORTFOLIO_ENV", "development"));
    let log_level = or_default("PORTFOLIO_LOG_LEVEL", default_log_level(&env));
    let catalog_path = or_default("PORTFOLIO_CATALOG_PATH", "books.csv");
    let image_origin = or_default("PORTFOLIO_IMAGE_ORIGIN", DEFAULT_IMAGE_ORIGIN)
        .trim_end_matches('/')
        .to_string();

    let request_timeout_secs = parse_u64("PORTFOLIO_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("PORTFOLIO_USER_AGENT", "portfolio/0.1 (catalog-loader)");

    let page_size = parse_usize("PORTFOLIO_PAGE_SIZE", "12")?;
    if page_size == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "PORTFOLIO_PAGE_SIZE".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }

    Ok(AppConfig {
        env,
        log_level,
        site_url,
        catalog_path,
        image_origin,
        request_timeout_secs,
        user_agent,
        page_size,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

/// Production logs only warnings and errors unless told otherwise.
fn default_log_level(env: &Environment) -> &'static str {
    match env {
        Environment::Production => "warn",
        Environment::Development | Environment::Test => "info",
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
