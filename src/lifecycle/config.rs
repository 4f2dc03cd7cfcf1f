//! Runtime configuration read from the environment.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `CAFETERIA_CHANNEL_CAPACITY` | `32` | Request buffer per collection actor |
//! | `CAFETERIA_SEED` | `true` | Load demo data on start |
//!
//! Missing or unparsable values fall back to the default with a log line.

use std::{env, fmt::Display, str::FromStr};
use tracing::{info, warn};

pub const DEFAULT_CHANNEL_CAPACITY: usize = 32;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub channel_capacity: usize,
    pub seed_demo_data: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            seed_demo_data: true,
        }
    }
}

impl Config {
    pub fn load() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build a config from any variable source.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut channel_capacity =
            try_load(&var, "CAFETERIA_CHANNEL_CAPACITY", DEFAULT_CHANNEL_CAPACITY);
        if channel_capacity == 0 {
            warn!("CAFETERIA_CHANNEL_CAPACITY must be positive, using default: {DEFAULT_CHANNEL_CAPACITY}");
            channel_capacity = DEFAULT_CHANNEL_CAPACITY;
        }
        Self {
            channel_capacity,
            seed_demo_data: try_load(&var, "CAFETERIA_SEED", true),
        }
    }
}

fn try_load<T>(var: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    let Some(raw) = var(key) else {
        info!("{key} not set, using default: {default}");
        return default;
    };
    raw.trim().parse().unwrap_or_else(|e| {
        warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
        default
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(Config::from_vars(vars(&[])), Config::default());
    }

    #[test]
    fn test_reads_values() {
        let config = Config::from_vars(vars(&[
            ("CAFETERIA_CHANNEL_CAPACITY", "8"),
            ("CAFETERIA_SEED", "false"),
        ]));
        assert_eq!(config.channel_capacity, 8);
        assert!(!config.seed_demo_data);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = Config::from_vars(vars(&[
            ("CAFETERIA_CHANNEL_CAPACITY", "0"),
            ("CAFETERIA_SEED", "maybe"),
        ]));
        assert_eq!(config, Config::default());

        let config = Config::from_vars(vars(&[("CAFETERIA_CHANNEL_CAPACITY", "lots")]));
        assert_eq!(config.channel_capacity, DEFAULT_CHANNEL_CAPACITY);
    }
}
