//! Environment-driven configuration for the dispatch run.

use std::time::Duration;

use rand::Rng;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("invalid dispatch config: {0}")]
    InvalidConfig(String),
}

/// Inclusive range of milliseconds to wait, sampled uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayRange {
    min_ms: u64,
    max_ms: u64,
}

impl DelayRange {
    pub const ZERO: DelayRange = DelayRange {
        min_ms: 0,
        max_ms: 0,
    };

    pub fn new(min_ms: u64, max_ms: u64) -> Result<Self, DispatchError> {
        if min_ms > max_ms {
            return Err(DispatchError::InvalidConfig(format!(
                "delay range {min_ms}-{max_ms} has min above max"
            )));
        }
        Ok(Self { min_ms, max_ms })
    }

    /// Parse `MIN-MAX` or a single fixed value, both in milliseconds.
    pub fn parse(s: &str) -> Result<Self, DispatchError> {
        let s = s.trim();
        let parse_ms = |part: &str| {
            part.trim().parse::<u64>().map_err(|e| {
                DispatchError::InvalidConfig(format!("invalid delay '{s}': {e}"))
            })
        };

        match s.split_once('-') {
            Some((min, max)) => Self::new(parse_ms(min)?, parse_ms(max)?),
            None => {
                let ms = parse_ms(s)?;
                Ok(Self {
                    min_ms: ms,
                    max_ms: ms,
                })
            }
        }
    }

    /// Shortest delay in milliseconds.
    pub fn min_ms(&self) -> u64 {
        self.min_ms
    }

    /// Longest delay in milliseconds.
    pub fn max_ms(&self) -> u64 {
        self.max_ms
    }

    /// Check if every sampled delay would be zero.
    pub fn is_zero(&self) -> bool {
        self.min_ms == 0 && self.max_ms == 0
    }

    /// Pick a delay from the range.
    pub fn sample(&self) -> Duration {
        let (lo, hi) = if self.min_ms <= self.max_ms {
            (self.min_ms, self.max_ms)
        } else {
            (self.max_ms, self.min_ms)
        };
        if lo == hi {
            return Duration::from_millis(lo);
        }
        Duration::from_millis(rand::rng().random_range(lo..=hi))
    }
}

/// Settings for a single dispatch run.
#[derive(Debug, Clone)]
pub struct DispatchConfig {
    /// How many tickets to issue before draining.
    pub tickets: u64,
    /// Wait between consecutive issues.
    pub issue_delay: DelayRange,
    /// Simulated time spent on each processed ticket.
    pub process_delay: DelayRange,
    /// Also write each event to stdout as a JSON line.
    pub events_json: bool,
    pub log_level: tracing::Level,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            tickets: 5,
            issue_delay: DelayRange {
                min_ms: 500,
                max_ms: 2000,
            },
            process_delay: DelayRange {
                min_ms: 1000,
                max_ms: 3000,
            },
            events_json: false,
            log_level: tracing::Level::INFO,
        }
    }
}

impl DispatchConfig {
    /// Default settings with every delay removed.
    pub fn instant() -> Self {
        Self {
            issue_delay: DelayRange::ZERO,
            process_delay: DelayRange::ZERO,
            ..Default::default()
        }
    }

    pub fn with_tickets(mut self, tickets: u64) -> Self {
        self.tickets = tickets;
        self
    }

    pub fn with_issue_delay(mut self, delay: DelayRange) -> Self {
        self.issue_delay = delay;
        self
    }

    pub fn with_process_delay(mut self, delay: DelayRange) -> Self {
        self.process_delay = delay;
        self
    }

    pub fn with_events_json(mut self, events_json: bool) -> Self {
        self.events_json = events_json;
        self
    }

    /// Build a config from environment variables.
    ///
    /// - `DISPATCH_TICKETS` (default: `5`)
    /// - `DISPATCH_ISSUE_DELAY_MS` (`MIN-MAX` or fixed, default: `500-2000`)
    /// - `DISPATCH_PROCESS_DELAY_MS` (`MIN-MAX` or fixed, default: `1000-3000`)
    /// - `DISPATCH_EVENTS_JSON` (`true`/`false`, default: false)
    /// - `DISPATCH_LOG_LEVEL` (default: `info`)
    pub fn from_env() -> Result<Self, DispatchError> {
        Self::from_lookup(read_env_var)
    }

    /// Same as [`Self::from_env`] but reading values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DispatchError>
    where
        F: Fn(&str) -> Result<Option<String>, DispatchError>,
    {
        let read = |key: &str| lookup(key).map(|v| v.and_then(non_empty));
        let mut cfg = Self::default();

        if let Some(v) = read("DISPATCH_TICKETS")? {
            cfg.tickets = v.parse().map_err(|e| {
                DispatchError::InvalidConfig(format!("invalid DISPATCH_TICKETS={v}: {e}"))
            })?;
        }
        if let Some(v) = read("DISPATCH_ISSUE_DELAY_MS")? {
            cfg.issue_delay = DelayRange::parse(&v)?;
        }
        if let Some(v) = read("DISPATCH_PROCESS_DELAY_MS")? {
            cfg.process_delay = DelayRange::parse(&v)?;
        }
        if let Some(v) = read("DISPATCH_EVENTS_JSON")? {
            cfg.events_json = parse_bool("DISPATCH_EVENTS_JSON", &v)?;
        }
        if let Some(v) = read("DISPATCH_LOG_LEVEL")? {
            cfg.log_level = v.parse().map_err(|_| {
                DispatchError::InvalidConfig(format!(
                    "invalid DISPATCH_LOG_LEVEL={v} (expected trace|debug|info|warn|error)"
                ))
            })?;
        }

        Ok(cfg)
    }
}

fn read_env_var(var_name: &str) -> Result<Option<String>, DispatchError> {
    match std::env::var(var_name) {
        Ok(v) => Ok(Some(v)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(DispatchError::InvalidConfig(format!(
            "failed reading {var_name}: {e}"
        ))),
    }
}

fn non_empty(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_bool(var_name: &str, v: &str) -> Result<bool, DispatchError> {
    match v.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" => Ok(true),
        "0" | "false" | "no" | "n" => Ok(false),
        _ => Err(DispatchError::InvalidConfig(format!(
            "invalid boolean for {var_name}={v} (expected true/false)"
        ))),
    }
}
