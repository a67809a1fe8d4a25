//! Application settings and dashboard constants.

use std::time::Duration;

use chrono::NaiveDate;
use thiserror::Error;


/// Number of records generated when no count is given.
pub const DEFAULT_RECORD_COUNT: usize = 1000;

/// Largest record count accepted from the command line.
pub const MAX_RECORD_COUNT: usize = 100_000;

/// Every Nth record of the primary sequence is perturbed in the mutated copy.
pub const MUTATION_INTERVAL: usize = 100;

/// Height of one table row in scroll units (pixels).
pub const ROW_HEIGHT_PX: u32 = 30;

/// Rows revealed before any scrolling happens.
pub const INITIAL_VISIBLE_ROWS: usize = 100;

/// Records projected into each chart.
pub const CHART_POINTS: usize = 10;

/// Rows moved per mouse wheel notch.
pub const WHEEL_ROWS: i64 = 3;

/// Default event loop tick (milliseconds).
pub const DEFAULT_TICK_RATE_MS: u64 = 250;

/// Value ranges for generated records.
pub const MAX_STOCK_PRICE: f64 = 1000.0;
pub const MAX_MARKET_CAP: f64 = 1_000_000_000.0;

/// Half-widths of the perturbation applied by the mutation pass.
pub const PRICE_JITTER: f64 = 5.0;
pub const CAP_JITTER: f64 = 500_000.0;

/// Default `tracing` filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "findash=info";

const EPOCH_YEAR: i32 = 2023;
const EPOCH_MONTH: u32 = 1;
const EPOCH_DAY: u32 = 1;


/// Close-of-business date of the first generated record.
pub fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(EPOCH_YEAR, EPOCH_MONTH, EPOCH_DAY).unwrap_or_default()
}


/// Errors raised while validating command-line configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("record count {0} exceeds the maximum of {MAX_RECORD_COUNT}")]
    TooManyRecords(usize),

    #[error("tick rate must be at least 1 ms")]
    ZeroTickRate,
}


/// Runtime settings for a dashboard session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub record_count: usize,
    pub seed: Option<u64>,
    pub tick_rate_ms: u64,
}


impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            record_count: DEFAULT_RECORD_COUNT,
            seed: None,
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
        }
    }
}


impl DashboardConfig {
    /// Check the settings before any data is generated.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.record_count > MAX_RECORD_COUNT {
            return Err(ConfigError::TooManyRecords(self.record_count));
        }
        if self.tick_rate_ms == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        Ok(())
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}
