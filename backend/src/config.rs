use std::env;
use thiserror::Error;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:7575";
const DEFAULT_RATE_LIMIT_MAX: usize = 5;
const DEFAULT_RATE_LIMIT_WINDOW_SECS: u64 = 10 * 60;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
  #[error("{name} must be a positive integer, got {value:?}")]
  InvalidNumber { name: &'static str, value: String },
}

/// Lead API settings, read from the environment (a `.env` file is loaded first if present).
///
/// Every setting is optional. Without `DATABASE_URL` leads are kept in memory,
/// without `REDIS_URL` rate-limit windows are kept in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
  pub listen_addr: String,
  pub database_url: Option<String>,
  pub redis_url: Option<String>,
  /// Only this `Origin` may post leads; any origin when unset.
  pub allowed_origin: Option<String>,
  pub rate_limit_max: usize,
  pub rate_limit_window_secs: u64,
}

impl Config {
  pub fn from_env() -> Result<Self, ConfigError> {
    Self::from_lookup(|name| env::var(name).ok())
  }

  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
    let non_empty = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    let rate_limit_max = match non_empty("RATE_LIMIT_MAX") {
      Some(v) => parse_positive("RATE_LIMIT_MAX", &v)? as usize,
      None => DEFAULT_RATE_LIMIT_MAX,
    };
    let rate_limit_window_secs = match non_empty("RATE_LIMIT_WINDOW_SECS") {
      Some(v) => parse_positive("RATE_LIMIT_WINDOW_SECS", &v)?,
      None => DEFAULT_RATE_LIMIT_WINDOW_SECS,
    };

    Ok(Self {
      listen_addr: non_empty("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string()),
      database_url: non_empty("DATABASE_URL"),
      redis_url: non_empty("REDIS_URL"),
      allowed_origin: non_empty("ALLOWED_ORIGIN").map(|o| o.trim_end_matches('/').to_string()),
      rate_limit_max,
      rate_limit_window_secs,
    })
  }
}

fn parse_positive(name: &'static str, value: &str) -> Result<u64, ConfigError> {
  match value.parse::<u64>() {
    Ok(n) if n > 0 => Ok(n),
    _ => Err(ConfigError::InvalidNumber { name, value: value.to_string() }),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;

  fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
    let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    Config::from_lookup(|name| vars.get(name).cloned())
  }

  #[test]
  fn defaults_without_environment() {
    let cfg = config(&[]).unwrap();
    assert_eq!(cfg.listen_addr, "0.0.0.0:7575");
    assert_eq!(cfg.database_url, None);
    assert_eq!(cfg.redis_url, None);
    assert_eq!(cfg.rate_limit_max, 5);
    assert_eq!(cfg.rate_limit_window_secs, 600);
  }

  #[test]
  fn reads_overrides_and_ignores_blank_values() {
    let cfg = config(&[
      ("LISTEN_ADDR", "127.0.0.1:9000"),
      ("DATABASE_URL", "  "),
      ("ALLOWED_ORIGIN", "https://example.com/"),
      ("RATE_LIMIT_MAX", "20"),
    ]).unwrap();
    assert_eq!(cfg.listen_addr, "127.0.0.1:9000");
    assert_eq!(cfg.database_url, None);
    assert_eq!(cfg.allowed_origin.as_deref(), Some("https://example.com"));
    assert_eq!(cfg.rate_limit_max, 20);
  }

  #[test]
  fn rejects_bad_numbers() {
    let err = config(&[("RATE_LIMIT_WINDOW_SECS", "0")]).unwrap_err();
    assert_eq!(err, ConfigError::InvalidNumber { name: "RATE_LIMIT_WINDOW_SECS", value: "0".into() });
    assert!(config(&[("RATE_LIMIT_MAX", "many")]).is_err());
  }
}
