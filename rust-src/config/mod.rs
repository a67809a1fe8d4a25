//! Configuration and settings for findash.

mod settings;

#[allow(unused_imports)]
pub use settings::{
    epoch,
    ConfigError,
    DashboardConfig,
    CAP_JITTER,
    CHART_POINTS,
    DEFAULT_LOG_FILTER,
    DEFAULT_RECORD_COUNT,
    DEFAULT_TICK_RATE_MS,
    INITIAL_VISIBLE_ROWS,
    MAX_MARKET_CAP,
    MAX_RECORD_COUNT,
    MAX_STOCK_PRICE,
    MUTATION_INTERVAL,
    PRICE_JITTER,
    ROW_HEIGHT_PX,
    WHEEL_ROWS,
};
