//! Chart data projections.

mod series;

#[allow(unused_imports)]
pub use series::{
    bar_chart,
    bar_series,
    line_chart,
    line_series,
    ChartKind,
    ChartSpec,
    ChartStyle,
    Rgba,
    Series,
};
