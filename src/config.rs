use log::{info, warn};
use std::{error::Error, fmt, path::PathBuf};

pub const ENV_SEED: &str = "BLOB_LIFE_SEED";
pub const ENV_ASSETS: &str = "BLOB_LIFE_ASSETS";
pub const ENV_INTERVAL: &str = "BLOB_LIFE_INTERVAL_MS";
pub const ENV_FAST_INTERVAL: &str = "BLOB_LIFE_FAST_INTERVAL_MS";

/// Runtime settings for simulation pacing, seeding and assets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Time between generations while running, in ms
    pub default_interval_ms: u64,
    /// Time between generations while the speed-up key is held, in ms
    pub fast_interval_ms: u64,
    /// Generations per full progress bar
    pub progress_period: u64,
    /// Fixed RNG seed; `None` seeds from the OS
    pub seed: Option<u64>,
    pub assets_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_interval_ms: 500,
            fast_interval_ms: 100,
            progress_period: 20,
            seed: None,
            assets_dir: PathBuf::from("assets"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    NotANumber { key: &'static str, value: String },
    ZeroInterval { key: &'static str },
    FastSlowerThanDefault { fast: u64, default: u64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NotANumber { key, value } => {
                write!(f, "{key}={value:?} is not a non-negative integer")
            }
            ConfigError::ZeroInterval { key } => write!(f, "{key} must be greater than zero"),
            ConfigError::FastSlowerThanDefault { fast, default } => write!(
                f,
                "fast interval ({fast}ms) must not exceed the default interval ({default}ms)"
            ),
        }
    }
}

impl Error for ConfigError {}

fn parse_u64(key: &'static str, value: &str) -> Result<u64, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::NotANumber {
        key,
        value: value.to_owned(),
    })
}

fn parse_interval(key: &'static str, value: &str) -> Result<u64, ConfigError> {
    match parse_u64(key, value)? {
        0 => Err(ConfigError::ZeroInterval { key }),
        ms => Ok(ms),
    }
}

impl Config {
    /// Defaults overlaid with `BLOB_LIFE_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with whatever `lookup` returns.
    /// Bad values are logged and skipped.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_SEED) {
            match parse_u64(ENV_SEED, &raw) {
                Ok(seed) => config.seed = Some(seed),
                Err(e) => warn!("config: {e}, using a random seed"),
            }
        }

        if let Some(dir) = lookup(ENV_ASSETS) {
            config.assets_dir = PathBuf::from(dir);
        }

        let mut intervals = (config.default_interval_ms, config.fast_interval_ms);
        if let Some(raw) = lookup(ENV_INTERVAL) {
            match parse_interval(ENV_INTERVAL, &raw) {
                Ok(ms) => intervals.0 = ms,
                Err(e) => warn!("config: {e}, keeping {}ms", config.default_interval_ms),
            }
        }
        if let Some(raw) = lookup(ENV_FAST_INTERVAL) {
            match parse_interval(ENV_FAST_INTERVAL, &raw) {
                Ok(ms) => intervals.1 = ms,
                Err(e) => warn!("config: {e}, keeping {}ms", config.fast_interval_ms),
            }
        }
        if let Err(e) = config.set_intervals(intervals.0, intervals.1) {
            warn!("config: {e}, keeping default pacing");
        }

        info!(
            "config: interval={}ms fast={}ms seed={:?} assets={}",
            config.default_interval_ms,
            config.fast_interval_ms,
            config.seed,
            config.assets_dir.display()
        );
        config
    }

    /// Replace both pacing intervals after checking they make sense together.
    /// On error nothing is changed.
    pub fn set_intervals(&mut self, default_ms: u64, fast_ms: u64) -> Result<(), ConfigError> {
        if fast_ms > default_ms {
            return Err(ConfigError::FastSlowerThanDefault {
                fast: fast_ms,
                default: default_ms,
            });
        }
        self.default_interval_ms = default_ms;
        self.fast_interval_ms = fast_ms;
        Ok(())
    }
}
