use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

pub const DEFAULT_INSPECTION_URL: &str =
    "http://info.kingcounty.gov/health/ehs/foodsafety/inspections/Results.aspx";
pub const DEFAULT_GEOCODER_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

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
/// Decoupled from the process environment so tests can drive it with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

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

    let env = parse_environment(&or_default("HEALTHINSPECT_ENV", "development"))?;
    let log_level = or_default("HEALTHINSPECT_LOG_LEVEL", "info");

    let inspection_url = or_default("HEALTHINSPECT_INSPECTION_URL", DEFAULT_INSPECTION_URL);
    let request_timeout_secs = parse_u64("HEALTHINSPECT_REQUEST_TIMEOUT_SECS", "30")?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "HEALTHINSPECT_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "timeout must be greater than zero".to_string(),
        });
    }
    let user_agent = or_default(
        "HEALTHINSPECT_USER_AGENT",
        "healthinspect/0.1 (food-safety-map)",
    );

    let fixture_path = PathBuf::from(or_default(
        "HEALTHINSPECT_FIXTURE_PATH",
        "./fixtures/inspection_page.html",
    ));
    let output_path = PathBuf::from(or_default("HEALTHINSPECT_OUTPUT_PATH", "my_map.json"));

    let geocoder_url = or_default("HEALTHINSPECT_GEOCODER_URL", DEFAULT_GEOCODER_URL);
    let geocoder_api_key = lookup("HEALTHINSPECT_GEOCODER_API_KEY")
        .ok()
        .filter(|k| !k.is_empty());

    Ok(AppConfig {
        env,
        log_level,
        inspection_url,
        request_timeout_secs,
        user_agent,
        fixture_path,
        output_path,
        geocoder_url,
        geocoder_api_key,
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidEnvVar`] for anything other than
/// `development`, `test`, or `production`.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "HEALTHINSPECT_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
