use anyhow::{Context, Result};

pub const DEFAULT_SOCIAL_LOOKUP_BASE_URL: &str = "https://facebook.com/search/people/?q=";

/// Application configuration loaded from environment variables.
/// Every setting has a default; malformed numeric values abort startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Pause between processed CSV rows. `0` disables pacing.
    pub batch_row_delay_ms: u64,
    pub max_upload_bytes: usize,
    pub social_lookup_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 5000,
            rust_log: "info".to_string(),
            batch_row_delay_ms: 100,
            max_upload_bytes: 16 * 1024 * 1024,
            social_lookup_base_url: DEFAULT_SOCIAL_LOOKUP_BASE_URL.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            batch_row_delay_ms: parse_env("BATCH_ROW_DELAY_MS", defaults.batch_row_delay_ms)?,
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", defaults.max_upload_bytes)?,
            social_lookup_base_url: std::env::var("SOCIAL_LOOKUP_BASE_URL")
                .unwrap_or(defaults.social_lookup_base_url),
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 5000);
        assert_eq!(config.batch_row_delay_ms, 100);
        assert_eq!(config.social_lookup_base_url, DEFAULT_SOCIAL_LOOKUP_BASE_URL);
    }

    #[test]
    fn test_parse_env_falls_back_to_default() {
        let value: u64 = parse_env("PEOPLE_SEARCH_TEST_UNSET_VARIABLE", 42).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("PEOPLE_SEARCH_TEST_BAD_NUMBER", "ten");
        let err = parse_env::<u64>("PEOPLE_SEARCH_TEST_BAD_NUMBER", 1).unwrap_err();
        assert!(err.to_string().contains("PEOPLE_SEARCH_TEST_BAD_NUMBER"));
    }
}
