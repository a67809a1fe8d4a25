//! Chart adapters: project the head of a record sequence into series.

use std::fmt;
use std::rc::Rc;

use serde::{Serialize, Serializer};

use crate::config::CHART_POINTS;
use crate::models::FinancialRecord;


/// Parallel label/value arrays for one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}


impl Series {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Largest value, or 0 for an empty series.
    pub fn max_value(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
}


/// RGBA colour with a CSS-style display form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f32,
}


impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.alpha >= 1.0 {
            write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.alpha)
        }
    }
}


impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}


/// Dataset styling handed to the chart renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartStyle {
    pub color: Rgba,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
}


/// One labelled, styled series ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub label: &'static str,
    pub style: ChartStyle,
    pub series: Series,
}


const LINE_STYLE: ChartStyle = ChartStyle {
    color: Rgba { r: 75, g: 192, b: 192, alpha: 1.0 },
    tension: Some(0.1),
};

const BAR_STYLE: ChartStyle = ChartStyle {
    color: Rgba { r: 53, g: 162, b: 235, alpha: 0.5 },
    tension: None,
};


fn project(records: &[Rc<FinancialRecord>], value: impl Fn(&FinancialRecord) -> f64) -> Series {
    let head = &records[..records.len().min(CHART_POINTS)];
    Series {
        labels: head.iter().map(|r| r.ticker.clone()).collect(),
        values: head.iter().map(|r| value(&**r)).collect(),
    }
}


/// Tickers against stock prices for the first `CHART_POINTS` records.
pub fn line_series(records: &[Rc<FinancialRecord>]) -> Series {
    project(records, |r| r.stock_price)
}


/// Tickers against market caps for the first `CHART_POINTS` records.
pub fn bar_series(records: &[Rc<FinancialRecord>]) -> Series {
    project(records, |r| r.market_cap as f64)
}


pub fn line_chart(records: &[Rc<FinancialRecord>]) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Line,
        label: "Stock Price",
        style: LINE_STYLE,
        series: line_series(records),
    }
}


pub fn bar_chart(records: &[Rc<FinancialRecord>]) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Bar,
        label: "Market Cap",
        style: BAR_STYLE,
        series: bar_series(records),
    }
}
