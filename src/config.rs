//! Runtime configuration read from the environment (after `.env` is loaded).

use crate::constants::DEFAULT_COMMAND_PREFIX;
use crate::exchange::{ActorId, RateLimits};
use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Expected {0} in the environment.")]
    Missing(&'static str),
    #[error("{key} has an invalid value: {value:?}")]
    Invalid { key: &'static str, value: String },
    #[error("rate limits are inconsistent: {0}")]
    Limits(&'static str),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub database_url: String,
    /// Guild the slash commands are registered for and messages are accepted from.
    pub server_id: u64,
    /// The administrator seeded into the directory and notified of client requests.
    pub admin_id: ActorId,
    pub prefix: String,
    pub limits: RateLimits,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes `std::env::var`.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |key: &'static str| get(key).filter(|v| !v.is_empty()).ok_or(ConfigError::Missing(key));

        let discord_token = required("DISCORD_TOKEN")?;
        let database_url = required("DATABASE_URL")?;
        let server_id = parse_id("SERVER_ID", &required("SERVER_ID")?)?;
        let admin_id = parse_id("ADMIN_ID", &required("ADMIN_ID")?)?;
        let prefix = get("COMMAND_PREFIX")
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_COMMAND_PREFIX.to_string());

        let defaults = RateLimits::default();
        let limit = |key: &'static str, default: Decimal| -> Result<Decimal, ConfigError> {
            match get(key) {
                Some(v) => parse(key, &v),
                None => Ok(default),
            }
        };
        let limits = RateLimits {
            min_buy: limit("RATE_MIN_BUY", defaults.min_buy)?,
            max_buy: limit("RATE_MAX_BUY", defaults.max_buy)?,
            min_spread: limit("RATE_MIN_SPREAD", defaults.min_spread)?,
            max_spread: limit("RATE_MAX_SPREAD", defaults.max_spread)?,
        };
        if limits.min_buy <= Decimal::ZERO || limits.min_buy > limits.max_buy {
            return Err(ConfigError::Limits("need 0 < RATE_MIN_BUY <= RATE_MAX_BUY"));
        }
        if limits.min_spread <= Decimal::ZERO || limits.min_spread > limits.max_spread {
            return Err(ConfigError::Limits("need 0 < RATE_MIN_SPREAD <= RATE_MAX_SPREAD"));
        }

        Ok(Self {
            discord_token,
            database_url,
            server_id,
            admin_id,
            prefix,
            limits,
        })
    }
}

fn parse<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse::<T>().map_err(|_| ConfigError::Invalid {
        key,
        value: value.to_string(),
    })
}

/// Discord snowflakes are never zero.
fn parse_id(key: &'static str, value: &str) -> Result<u64, ConfigError> {
    match parse::<u64>(key, value)? {
        0 => Err(ConfigError::Invalid {
            key,
            value: value.to_string(),
        }),
        id => Ok(id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    const BASE: &[(&str, &str)] = &[
        ("DISCORD_TOKEN", "token"),
        ("DATABASE_URL", "postgres://localhost/desk"),
        ("SERVER_ID", "42"),
        ("ADMIN_ID", "8575573468"),
    ];

    #[test]
    fn defaults_apply() {
        let cfg = Config::from_lookup(lookup(BASE)).expect("valid config");
        assert_eq!(cfg.admin_id, 8575573468);
        assert_eq!(cfg.prefix, "!");
        assert_eq!(cfg.limits, RateLimits::default());
    }

    #[test]
    fn limits_can_be_overridden() {
        let mut pairs = BASE.to_vec();
        pairs.push(("RATE_MAX_SPREAD", "2.5"));
        pairs.push(("COMMAND_PREFIX", "$"));
        let cfg = Config::from_lookup(lookup(&pairs)).expect("valid config");
        assert_eq!(cfg.limits.max_spread, dec!(2.5));
        assert_eq!(cfg.prefix, "$");
    }

    #[test]
    fn missing_and_invalid_values_are_reported() {
        let err = Config::from_lookup(lookup(&BASE[..3])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("ADMIN_ID"));

        let mut pairs = BASE.to_vec();
        pairs[2] = ("SERVER_ID", "abc");
        let err = Config::from_lookup(lookup(&pairs)).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "SERVER_ID", .. }));

        let mut pairs = BASE.to_vec();
        pairs.push(("RATE_MIN_BUY", "130"));
        let err = Config::from_lookup(lookup(&pairs)).unwrap_err();
        assert!(matches!(err, ConfigError::Limits(_)));
    }
}
