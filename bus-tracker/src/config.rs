//! Server configuration from the environment.

use std::net::SocketAddr;
use std::time::Duration;

/// Environment variable naming the bind address.
pub const ADDR_VAR: &str = "BUS_TRACKER_ADDR";

/// Environment variable seeding occupancy generation.
pub const SEED_VAR: &str = "BUS_TRACKER_SEED";

/// Environment variable overriding the fleet refresh interval, in seconds.
pub const REFRESH_VAR: &str = "BUS_TRACKER_REFRESH_SECS";

/// Error returned when an environment variable holds a bad value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {var}={value:?}: {reason}")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub reason: String,
}

/// Configuration for the bus tracker server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind
    pub addr: SocketAddr,

    /// Seed for occupancy generation; random when unset
    pub seed: Option<u64>,

    /// How often the fleet is regenerated
    pub refresh_interval: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            seed: None,
            refresh_interval: Duration::from_secs(30),
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// Unset variables keep their defaults; set but unparsable ones are errors.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(ADDR_VAR) {
            config.addr = parse_var(ADDR_VAR, value)?;
        }
        if let Some(value) = lookup(SEED_VAR) {
            config.seed = Some(parse_var(SEED_VAR, value)?);
        }
        if let Some(value) = lookup(REFRESH_VAR) {
            let secs: u64 = parse_var(REFRESH_VAR, value.clone())?;
            if secs == 0 {
                return Err(ConfigError {
                    var: REFRESH_VAR,
                    value,
                    reason: "must be at least 1".to_string(),
                });
            }
            config.refresh_interval = Duration::from_secs(secs);
        }

        Ok(config)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

fn parse_var<T>(var: &'static str, value: String) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match value.trim().parse() {
        Ok(parsed) => Ok(parsed),
        Err(e) => Err(ConfigError {
            var,
            reason: e.to_string(),
            value,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| vars.get(k).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.addr.to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn reads_all_vars() {
        let config = ServerConfig::from_lookup(lookup(&[
            (ADDR_VAR, "0.0.0.0:8080"),
            (SEED_VAR, " 42 "),
            (REFRESH_VAR, "5"),
        ]))
        .unwrap();
        assert_eq!(config.addr.port(), 8080);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.refresh_interval, Duration::from_secs(5));
    }

    #[test]
    fn with_seed_fixes_generation() {
        let config = ServerConfig::default().with_seed(7);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.addr, ServerConfig::default().addr);

        let from_env = ServerConfig::from_lookup(lookup(&[(SEED_VAR, "7")])).unwrap();
        assert_eq!(from_env, config);
    }

    #[test]
    fn bad_values_are_errors() {
        let err = ServerConfig::from_lookup(lookup(&[(SEED_VAR, "abc")])).unwrap_err();
        assert_eq!(err.var, SEED_VAR);
        assert_eq!(err.value, "abc");

        let err = ServerConfig::from_lookup(lookup(&[(ADDR_VAR, "localhost")])).unwrap_err();
        assert_eq!(err.var, ADDR_VAR);

        let err = ServerConfig::from_lookup(lookup(&[(REFRESH_VAR, "0")])).unwrap_err();
        assert_eq!(err.reason, "must be at least 1");
    }
}
